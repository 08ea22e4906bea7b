//! Store order payloads.

use serde::Serialize;

/// Order id that is never placed by the suite.
pub const UNKNOWN_ORDER_ID: u64 = 11111;

/// An 80-digit order id, far beyond any 64-bit id the API can store.
pub const OVERLONG_ORDER_ID: &str =
    "12345678901234567890123456789012345678901234567890123456789012345678901234567890";

/// A store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub pet_id: u64,
    pub quantity: u32,
    pub ship_date: String,
    pub status: String,
    pub complete: bool,
}

impl Order {
    /// The order placed by the order scenario.
    pub fn seed() -> Self {
        Self {
            id: 6178881,
            pet_id: 1,
            quantity: 1,
            ship_date: "2022-04-03T11:40:11.305Z".to_string(),
            status: "placed".to_string(),
            complete: true,
        }
    }
}
