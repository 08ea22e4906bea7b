//! Functional Tests: Happy Path
//!
//! Order placement, pet lookup/create/update and logout against the live API.

#![cfg(feature = "happy-path")]

use petstore_tests::catalog;
use petstore_tests::fixtures::{Order, Pet};
use petstore_tests::harness::petstore;
use serial_test::serial;

/// Verify an order can be placed for a pet.
#[tokio::test]
async fn test_place_order() {
    let client = petstore();

    catalog::place_order(&Order::seed())
        .expect("Order payload should serialize")
        .execute(&client)
        .await;
}

/// Verify pets with status `available` can be found through the filter.
#[tokio::test]
async fn test_find_pets_by_status_available() {
    let client = petstore();

    catalog::find_pets_by_status("available")
        .execute(&client)
        .await;
}

/// Verify a new pet can be added to the store.
#[tokio::test]
#[serial(pet)]
async fn test_add_new_pet() {
    let client = petstore();

    catalog::add_pet(&Pet::seed())
        .expect("Pet payload should serialize")
        .execute(&client)
        .await;
}

/// Verify existing pet details can be updated.
#[tokio::test]
#[serial(pet)]
async fn test_update_existing_pet() {
    let client = petstore();

    catalog::update_pet(&Pet::seed_updated())
        .expect("Pet payload should serialize")
        .execute(&client)
        .await;
}

/// Verify the user session can be logged out.
#[tokio::test]
async fn test_user_logout() {
    let client = petstore();

    catalog::logout().execute(&client).await;
}
