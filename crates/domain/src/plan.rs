//! Test case definitions and the built-in backend plan.

use std::collections::HashSet;
use std::time::Duration;

use serde_json::json;

use crate::error::{DomainError, DomainResult};
use crate::request::{CHAT_TIMEOUT, CaseRequest, READ_TIMEOUT};
use crate::testing::{Assertion, Observation};

/// A single HTTP test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSpec {
    /// Key in the result set.
    pub name: String,
    /// Heading shown while the case runs.
    pub title: String,
    /// Request template.
    pub request: CaseRequest,
    /// Accepted status code.
    pub expected_status: u16,
    /// Shape checks, all of which must pass.
    pub assertions: Vec<Assertion>,
    /// Informational notes produced after a pass.
    pub observations: Vec<Observation>,
    /// Printed when the server answers `500 Internal Server Error`.
    pub internal_error_hint: Option<String>,
}

impl CaseSpec {
    /// Create a case expecting status 200 with no checks yet.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, request: CaseRequest) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            request,
            expected_status: 200,
            assertions: Vec::new(),
            observations: Vec::new(),
            internal_error_hint: None,
        }
    }

    /// Add an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Add an observation (builder pattern).
    #[must_use]
    pub fn with_observation(mut self, observation: Observation) -> Self {
        self.observations.push(observation);
        self
    }

    /// Set the hint printed on a 500 answer (builder pattern).
    #[must_use]
    pub fn with_internal_error_hint(mut self, hint: impl Into<String>) -> Self {
        self.internal_error_hint = Some(hint.into());
        self
    }
}

/// A check derived from the outcomes of cases that already ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSpec {
    /// Key in the result set.
    pub name: String,
    /// Human-readable label used in diagnostics.
    pub title: String,
    /// Member case names; the check passes iff all of them passed.
    pub members: Vec<String>,
}

/// One step of a [`TestPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    /// Run an HTTP case.
    Case(CaseSpec),
    /// Derive a verdict from earlier cases.
    Composite(CompositeSpec),
}

impl PlanStep {
    /// Name recorded in the result set.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Case(case) => &case.name,
            Self::Composite(composite) => &composite.name,
        }
    }
}

/// An ordered list of steps, run sequentially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestPlan {
    /// Steps in execution order.
    pub steps: Vec<PlanStep>,
}

impl TestPlan {
    /// Create an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a case (builder pattern).
    #[must_use]
    pub fn case(mut self, case: CaseSpec) -> Self {
        self.steps.push(PlanStep::Case(case));
        self
    }

    /// Append a composite check (builder pattern).
    #[must_use]
    pub fn composite(
        mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        members: &[&str],
    ) -> Self {
        self.steps.push(PlanStep::Composite(CompositeSpec {
            name: name.into(),
            title: title.into(),
            members: members.iter().map(ToString::to_string).collect(),
        }));
        self
    }

    /// Number of steps, which is also the number of result entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check that names are unique and that composites only reference
    /// cases running before them.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] found.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for step in &self.steps {
            if let PlanStep::Composite(composite) = step
                && let Some(member) = composite
                    .members
                    .iter()
                    .find(|m| !seen.contains(m.as_str()))
            {
                return Err(DomainError::UnknownCompositeMember {
                    composite: composite.name.clone(),
                    member: member.clone(),
                });
            }
            if !seen.insert(step.name()) {
                return Err(DomainError::DuplicateCase(step.name().to_string()));
            }
        }
        Ok(())
    }

    /// The backend smoke-test plan with the default timeouts.
    #[must_use]
    pub fn backend() -> Self {
        Self::backend_with_timeouts(READ_TIMEOUT, CHAT_TIMEOUT)
    }

    /// The backend smoke-test plan.
    ///
    /// `read` bounds the root and status calls, `chat` bounds the two calls
    /// answered by the language model.
    #[must_use]
    pub fn backend_with_timeouts(read: Duration, chat: Duration) -> Self {
        let get_root = CaseSpec::new(
            "get_root",
            "GET /api/",
            CaseRequest::get("/api/").with_timeout(read),
        )
        .with_assertion(Assertion::field_equals("message", "Hello World"));

        let post_status = CaseSpec::new(
            "post_status",
            "POST /api/status",
            CaseRequest::post_json("/api/status", json!({"client_name": "qa"}))
                .with_timeout(read),
        )
        .with_assertion(Assertion::fields_present(&["id", "client_name", "timestamp"]))
        .with_assertion(Assertion::field_equals("client_name", "qa"));

        let get_status = CaseSpec::new(
            "get_status",
            "GET /api/status",
            CaseRequest::get("/api/status").with_timeout(read),
        )
        .with_assertion(Assertion::IsArray)
        .with_observation(Observation::Length {
            label: "status checks".to_string(),
        })
        .with_observation(Observation::CountMatching {
            field: "client_name".to_string(),
            value: json!("qa"),
        });

        let chat_greeting = CaseSpec::new(
            "post_chat_greeting",
            "POST /api/chat",
            CaseRequest::post_json(
                "/api/chat",
                json!({
                    "mode": "greeting",
                    "language": "de",
                    "model": "gpt-4o-mini",
                    "summary": {}
                }),
            )
            .with_timeout(chat),
        )
        .with_assertion(Assertion::non_empty_text("text"))
        .with_observation(text_snippet())
        .with_internal_error_hint("This might indicate an issue with the LLM integration");

        let chat_messages = CaseSpec::new(
            "post_chat_messages",
            "POST /api/chat (chat mode)",
            CaseRequest::post_json(
                "/api/chat",
                json!({
                    "mode": "chat",
                    "language": "en",
                    "model": "gpt-4o-mini",
                    "summary": {"weight": "70kg", "activity": "moderate"},
                    "messages": [{
                        "role": "user",
                        "content": "What's a good breakfast for weight management?"
                    }]
                }),
            )
            .with_timeout(chat),
        )
        .with_assertion(Assertion::non_empty_text("text"))
        .with_observation(text_snippet());

        Self::new()
            .case(get_root)
            .case(post_status)
            .case(get_status)
            .case(chat_greeting)
            .case(chat_messages)
            .composite(
                "mongodb_connection",
                "MongoDB connection",
                &["post_status", "get_status"],
            )
    }
}

fn text_snippet() -> Observation {
    Observation::Snippet {
        field: "text".to_string(),
        max_chars: 100,
    }
}
