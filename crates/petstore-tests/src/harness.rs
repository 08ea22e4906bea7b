//! Per-binary setup shared by the integration tests.
//!
//! Configuration is resolved once per test binary. Every scenario obtains its
//! client through `petstore()`, so a configuration error fails each scenario
//! with the same message before any request is sent.

use crate::config::{resolve_base_uri, ConfigError};
use crate::fixtures::PetStoreClient;
use std::sync::LazyLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "petstore_tests=info";

static BASE_URI: LazyLock<Result<String, ConfigError>> = LazyLock::new(|| resolve_base_uri());

/// Install the tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// The resolved base URI, or the error that prevented resolving it.
pub fn base_uri() -> Result<&'static str, &'static ConfigError> {
    LazyLock::force(&BASE_URI).as_deref()
}

/// Build a client from a resolved base URI.
///
/// Panics with the configuration error if resolution failed.
#[allow(clippy::panic)]
pub fn client_for(base_uri: Result<&str, &ConfigError>) -> PetStoreClient {
    match base_uri {
        Ok(uri) => PetStoreClient::new(uri),
        Err(e) => panic!("Pet store configuration invalid - {}", e),
    }
}

/// Build a client for the configured API.
///
/// Panics with the configuration error if `PETSTOREURI` is unusable.
pub fn petstore() -> PetStoreClient {
    init_tracing();
    client_for(base_uri())
}
