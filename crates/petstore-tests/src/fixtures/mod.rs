//! Test fixtures: the API client and the payload records sent to it.

pub mod order;
pub mod pet;
pub mod petstore_client;
pub mod user;

pub use order::Order;
pub use pet::{Category, Pet, Tag};
pub use petstore_client::{ApiRequest, ApiResponse, PetStoreClient, PetStoreClientError};
pub use user::{User, UserCredentials};
