//! Probe Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, base URL source, progress reporter)
//! - Use case orchestration (single case, whole plan)
//! - Application-level error handling

pub mod error;
pub mod execute_case;
pub mod ports;
pub mod run_suite;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use execute_case::ExecuteCase;
pub use ports::{BaseUrlSource, ConfigError, HttpClient, HttpClientError, Reporter};
pub use run_suite::RunSuite;
