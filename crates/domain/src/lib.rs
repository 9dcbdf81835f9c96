//! Probe Domain - Core types
//!
//! This crate defines the domain model of the backend smoke-test runner:
//! requests, responses, response checks, the test plan and its results.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod outcome;
pub mod plan;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use outcome::{CaseFailure, CaseOutcome, ResultSet};
pub use plan::{CaseSpec, CompositeSpec, PlanStep, TestPlan};
pub use request::{CaseRequest, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{Assertion, Note, NoteLevel, Observation, snippet};
