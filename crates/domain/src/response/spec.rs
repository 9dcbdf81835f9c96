//! Response specification type
//!
//! Contains types for representing HTTP responses including
//! status codes, body, and timing information.

use std::time::Duration;

use serde_json::Value;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true for `500 Internal Server Error`.
    #[must_use]
    pub const fn is_internal_server_error(&self) -> bool {
        self.0 == 500
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// HTTP response specification.
///
/// Contains all information received from an HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text; invalid UTF-8 is replaced.
    pub body: String,
    /// Response time.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: &[u8], duration: Duration) -> Self {
        Self {
            status: status.into(),
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
        }
    }

    /// Creates a response with a JSON body. Mostly useful in tests.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string().as_bytes(), Duration::ZERO)
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is not valid JSON.
    pub fn parse_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
