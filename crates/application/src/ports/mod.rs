//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod base_url;
mod http_client;
mod reporter;

pub use base_url::{BaseUrlSource, ConfigError};
pub use http_client::{HttpClient, HttpClientError};
pub use reporter::Reporter;
