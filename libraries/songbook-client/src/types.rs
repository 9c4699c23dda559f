//! Types for Songbook API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default playlist API host.
pub const DEFAULT_API_URL: &str = "https://learn.smktelkom-mlg.sch.id/ukl2";

/// Default host serving `/auth/login`.
pub const DEFAULT_AUTH_URL: &str = "https://dummyjson.com";

/// Configuration for connecting to the playlist API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the playlist API (e.g. "https://music.example.com/api")
    pub url: String,
    /// Base URL of the login service
    pub auth_url: String,
    /// Bearer token attached to API requests, if any
    pub access_token: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given API URL with default auth host.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Use a different login host.
    #[must_use]
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Attach a bearer token to every API request.
    #[must_use]
    pub fn with_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// =============================================================================
// Response Envelope
// =============================================================================

/// `{ success, message?, data? }` wrapper used by the playlist endpoints.
///
/// `success` is kept as raw JSON so both presence and truthiness can be
/// checked; some endpoints omit it entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the body carried a `success` key at all
    pub fn has_success_flag(&self) -> bool {
        self.success.is_some()
    }

    /// Whether `success` is present and truthy
    pub fn is_success(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy)
    }
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
