//! Base URL port

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons the base URL could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file is missing or could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// No line defines the key.
    #[error("{key} not found in {}", path.display())]
    KeyNotFound {
        /// Key searched for.
        key: String,
        /// File that was scanned.
        path: PathBuf,
    },

    /// The key is defined with an empty value.
    #[error("{key} is empty in {}", path.display())]
    EmptyValue {
        /// Key searched for.
        key: String,
        /// File that was scanned.
        path: PathBuf,
    },
}

/// Port for resolving the base URL of the API under test.
///
/// Resolved once per test case; implementations must not cache across calls
/// unless the value is fixed by construction.
pub trait BaseUrlSource: Send + Sync {
    /// Returns the base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no usable value is available.
    fn resolve(&self) -> Result<String, ConfigError>;
}
