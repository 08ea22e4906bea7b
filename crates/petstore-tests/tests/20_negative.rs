//! Functional Tests: Negative
//!
//! Deleting records that do not exist must return 404, whatever the id length.

#![cfg(feature = "negative")]

use petstore_tests::catalog;
use petstore_tests::fixtures::order::{OVERLONG_ORDER_ID, UNKNOWN_ORDER_ID};
use petstore_tests::fixtures::user::UNKNOWN_USER_ID;
use petstore_tests::harness::petstore;

/// Verify deleting an unknown order id returns `Order Not Found`.
#[tokio::test]
async fn test_delete_unknown_order() {
    let client = petstore();

    catalog::delete_unknown_order(&UNKNOWN_ORDER_ID.to_string())
        .execute(&client)
        .await;
}

/// Verify an 80-digit order id is treated as unknown rather than as a server error.
#[tokio::test]
async fn test_delete_order_with_overlong_id() {
    let client = petstore();

    catalog::delete_unknown_order(OVERLONG_ORDER_ID)
        .execute(&client)
        .await;
}

/// Verify deleting an unknown user returns 404.
#[tokio::test]
async fn test_delete_unknown_user() {
    let client = petstore();

    catalog::delete_unknown_user(UNKNOWN_USER_ID)
        .execute(&client)
        .await;
}
