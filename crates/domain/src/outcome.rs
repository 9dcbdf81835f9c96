//! Test case outcomes and the aggregated result set.

use indexmap::IndexMap;
use thiserror::Error;

use crate::error::{DomainError, DomainResult};

/// Why a test case failed.
///
/// Every variant is caught inside the case that produced it and turned into a
/// printed diagnostic plus a `false` result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaseFailure {
    /// The base URL could not be resolved.
    #[error("Could not get backend URL: {0}")]
    Config(String),

    /// Connection refused, timeout, DNS or any other transport fault.
    #[error("Request error: {0}")]
    Transport(String),

    /// The body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    MalformedBody(String),

    /// The body decoded but did not have the expected shape.
    #[error("{0}")]
    ShapeMismatch(String),

    /// The server answered with an unexpected status code.
    #[error("Status code: {status}")]
    Status {
        /// Status code received.
        status: u16,
    },

    /// At least one member of a composite check failed.
    #[error("member checks failed: {}", .failed.join(", "))]
    Composite {
        /// Names of the failing members, in plan order.
        failed: Vec<String>,
    },
}

/// Outcome of a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Case name, the key in the result set.
    pub name: String,
    /// Failure reason, `None` when the case passed.
    pub failure: Option<CaseFailure>,
}

impl CaseOutcome {
    /// Create a passing outcome.
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: None,
        }
    }

    /// Create a failing outcome.
    #[must_use]
    pub fn fail(name: impl Into<String>, failure: CaseFailure) -> Self {
        Self {
            name: name.into(),
            failure: Some(failure),
        }
    }

    /// Whether the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Ordered mapping from case name to pass/fail, built as cases run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: IndexMap<String, bool>,
}

impl ResultSet {
    /// Create an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of a case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateCase`] if the name was already recorded.
    pub fn record(&mut self, name: impl Into<String>, passed: bool) -> DomainResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(DomainError::DuplicateCase(name));
        }
        self.entries.insert(name, passed);
        Ok(())
    }

    /// Record a case outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateCase`] if the name was already recorded.
    pub fn record_outcome(&mut self, outcome: &CaseOutcome) -> DomainResult<()> {
        self.record(outcome.name.clone(), outcome.passed())
    }

    /// Look up the result of a case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    /// Iterate entries in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, passed)| (name.as_str(), *passed))
    }

    /// Number of passing entries.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.values().filter(|passed| **passed).count()
    }

    /// Number of entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Names of failing entries, in recording order.
    #[must_use]
    pub fn failed_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, passed)| !passed)
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether every recorded entry passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit code: 0 if every entry passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.all_passed())
    }
}
