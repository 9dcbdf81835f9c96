//! Request types
//!
//! Contains the HTTP method and the request specifications sent by test cases.

mod method;
mod spec;

pub use method::HttpMethod;
pub use spec::{CHAT_TIMEOUT, CaseRequest, READ_TIMEOUT, RequestSpec};
