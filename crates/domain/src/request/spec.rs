//! Request specification types

use std::time::Duration;

use serde_json::Value;

use super::HttpMethod;

/// Timeout applied to plain reads and status writes.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout applied to calls backed by the chat model, which answer slower.
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully resolved HTTP request, ready to be handed to an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
    /// Upper bound for the whole call
    pub timeout: Duration,
}

impl RequestSpec {
    /// Returns the timeout in milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// The base-URL independent part of a test case request.
///
/// The endpoint path is appended verbatim to whatever base URL is resolved
/// when the case runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint path, e.g. `/api/status`
    pub path: String,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Upper bound for the call
    pub timeout: Duration,
}

impl CaseRequest {
    /// Creates a GET request template.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
            timeout: READ_TIMEOUT,
        }
    }

    /// Creates a POST request template with a JSON body.
    #[must_use]
    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
            timeout: READ_TIMEOUT,
        }
    }

    /// Overrides the timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the target URL by concatenating the base URL and the path.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.path)
    }

    /// Resolves this template against a base URL.
    #[must_use]
    pub fn resolve(&self, base_url: &str) -> RequestSpec {
        RequestSpec {
            method: self.method,
            url: self.url(base_url),
            body: self.body.clone(),
            timeout: self.timeout,
        }
    }
}
