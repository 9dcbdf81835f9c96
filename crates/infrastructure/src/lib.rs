//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod reporting;

pub use adapters::{
    DEFAULT_ENV_FILE, DEFAULT_URL_KEY, EnvFileBaseUrl, FixedBaseUrl, ReqwestHttpClient,
};
pub use reporting::ConsoleReporter;
