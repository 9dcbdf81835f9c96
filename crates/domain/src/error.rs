//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A test case name was recorded or declared twice.
    #[error("duplicate test case: {0}")]
    DuplicateCase(String),

    /// A composite check references a case that does not run before it.
    #[error("composite check '{composite}' references unknown case '{member}'")]
    UnknownCompositeMember {
        /// Name of the composite check.
        composite: String,
        /// The member name that could not be found.
        member: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
