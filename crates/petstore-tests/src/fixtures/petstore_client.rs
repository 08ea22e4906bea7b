//! Pet store client fixture.
//!
//! Thin transport over `reqwest`: every request carries the JSON content type,
//! and the raw status and body text are captured for substring assertions.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Content type sent on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf8";

/// Query parameter names whose values never appear in logs or Debug output.
const REDACTED_QUERY_KEYS: &[&str] = &["password"];

/// Pet store client errors.
#[derive(Debug, Error)]
pub enum PetStoreClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A request against a path relative to the API base URL.
#[derive(Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Create a request with no query parameters and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body serialized from `payload`.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, PetStoreClientError> {
        self.body = Some(serde_json::to_vec(payload)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Query parameters with sensitive values replaced, for logging.
    fn redacted_query(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .map(|(key, value)| {
                if REDACTED_QUERY_KEYS.contains(&key.as_str()) {
                    (key.as_str(), "[REDACTED]")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.redacted_query())
            .field("body", &self.body.as_ref().map(|b| format!("[{} bytes]", b.len())))
            .finish()
    }
}

/// Captured response: status code and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the pet store API.
pub struct PetStoreClient {
    base_url: String,
    http_client: Client,
}

impl PetStoreClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }

    /// Join a relative path onto the base URL.
    ///
    /// Exactly one `/` separates the two, whether or not the base URL ends with one.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a request and capture the status and body.
    ///
    /// Non-2xx statuses are returned as responses, not errors; only transport
    /// failures produce `Err`. Transport errors drop the URL, whose query
    /// string may carry a password.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, PetStoreClientError> {
        let url = self.url_for(request.path());

        let mut builder = self
            .http_client
            .request(request.method().clone(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if !request.query_params().is_empty() {
            builder = builder.query(request.query_params());
        }

        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(
            method = %request.method(),
            path = %request.path(),
            query = ?request.redacted_query(),
            status,
            body_len = body.len(),
            "Pet store request completed"
        );

        Ok(ApiResponse { status, body })
    }
}
