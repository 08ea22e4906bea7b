//! Run configuration for the pet store suite.
//!
//! The API base URL is read from the `PETSTOREURI` environment variable. A missing
//! or malformed value fails fast instead of surfacing later as a transport error.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Environment variable holding the API base URL.
pub const BASE_URI_ENV_VAR: &str = "PETSTOREURI";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}. Set it to the pet store API base URL, e.g. https://petstore.example.com/v2/")]
    MissingEnvVar(String),

    #[error("Environment variable {0} is set but empty")]
    EmptyEnvVar(String),

    #[error("Invalid base URI '{uri}': must start with http:// or https://")]
    InvalidBaseUri { uri: String },
}

/// Resolved run configuration.
///
/// Built once per test binary and shared read-only by every scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetStoreConfig {
    /// API base URL with surrounding whitespace removed.
    pub base_uri: String,
}

impl PetStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw = vars
            .get(BASE_URI_ENV_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(BASE_URI_ENV_VAR.to_string()))?;

        let base_uri = raw.trim();
        if base_uri.is_empty() {
            return Err(ConfigError::EmptyEnvVar(BASE_URI_ENV_VAR.to_string()));
        }

        let lowered = base_uri.to_ascii_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUri {
                uri: base_uri.to_string(),
            });
        }

        Ok(Self {
            base_uri: base_uri.to_string(),
        })
    }
}

/// Resolve the API base URL from the process environment.
pub fn resolve_base_uri() -> Result<String, ConfigError> {
    PetStoreConfig::from_env().map(|config| config.base_uri)
}
