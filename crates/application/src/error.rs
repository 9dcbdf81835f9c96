//! Application error types

use probe_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Individual test case failures never show up here; they are recorded as
/// `false` in the result set. Only a malformed plan aborts a run.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
