//! Infrastructure adapters

mod env_file;
mod reqwest_client;

pub use env_file::{DEFAULT_ENV_FILE, DEFAULT_URL_KEY, EnvFileBaseUrl, FixedBaseUrl};
pub use reqwest_client::ReqwestHttpClient;
