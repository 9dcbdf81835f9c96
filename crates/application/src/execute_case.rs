//! Execute Case Use Case
//!
//! Runs one HTTP test case: resolve the base URL, send the request once,
//! check the status and the response shape, report every step.

use std::sync::Arc;

use probe_domain::{CaseFailure, CaseOutcome, CaseSpec, Note};

use crate::ports::{BaseUrlSource, HttpClient, Reporter};

/// Use case for running a single HTTP test case.
///
/// Every fault is contained: the result is always a [`CaseOutcome`].
pub struct ExecuteCase<C, S> {
    client: Arc<C>,
    base_url: Arc<S>,
}

impl<C: HttpClient, S: BaseUrlSource> ExecuteCase<C, S> {
    /// Creates the use case from an HTTP client and a base URL source.
    pub const fn new(client: Arc<C>, base_url: Arc<S>) -> Self {
        Self { client, base_url }
    }

    /// Runs the case and reports its progress.
    pub async fn execute<R: Reporter + ?Sized>(
        &self,
        case: &CaseSpec,
        reporter: &R,
    ) -> CaseOutcome {
        reporter.case_started(&case.title);

        let base_url = match self.base_url.resolve() {
            Ok(url) => url,
            Err(e) => return Self::fail(case, CaseFailure::Config(e.to_string()), reporter),
        };

        let request = case.request.resolve(&base_url);
        reporter.request_sent(&request);
        tracing::debug!(
            case = %case.name,
            method = %request.method,
            url = %request.url,
            timeout_ms = request.timeout_ms(),
            "sending request"
        );

        let response = match self.client.execute(&request).await {
            Ok(response) => response,
            Err(e) => return Self::fail(case, CaseFailure::Transport(e.to_string()), reporter),
        };
        tracing::debug!(
            case = %case.name,
            status = response.status.as_u16(),
            elapsed_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            "response received"
        );
        reporter.response_received(&response);

        if response.status.as_u16() != case.expected_status {
            let outcome = Self::fail(
                case,
                CaseFailure::Status {
                    status: response.status.as_u16(),
                },
                reporter,
            );
            if response.status.is_internal_server_error()
                && let Some(hint) = &case.internal_error_hint
            {
                reporter.note(&Note::warn(hint.clone()));
            }
            return outcome;
        }

        let body = match response.parse_json() {
            Ok(body) => body,
            Err(e) => {
                return Self::fail(case, CaseFailure::MalformedBody(e.to_string()), reporter);
            }
        };

        if let Some(message) = case
            .assertions
            .iter()
            .find_map(|assertion| assertion.check(&body).err())
        {
            return Self::fail(case, CaseFailure::ShapeMismatch(message), reporter);
        }

        reporter.case_passed(&case.title);
        for note in case.observations.iter().filter_map(|o| o.observe(&body)) {
            reporter.note(&note);
        }
        CaseOutcome::pass(&case.name)
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    fn fail<R: Reporter + ?Sized>(
        case: &CaseSpec,
        failure: CaseFailure,
        reporter: &R,
    ) -> CaseOutcome {
        tracing::debug!(case = %case.name, %failure, "case failed");
        reporter.case_failed(&case.title, &failure);
        CaseOutcome::fail(&case.name, failure)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::HttpClientError;
    use crate::test_support::{BASE_URL, RecordingReporter, ScriptedClient, StaticBaseUrl};
    use pretty_assertions::assert_eq;
    use probe_domain::{Assertion, CaseRequest, Observation, PlanStep, ResponseSpec, TestPlan};
    use serde_json::json;
    use std::time::Duration;

    fn use_case(client: ScriptedClient) -> ExecuteCase<ScriptedClient, StaticBaseUrl> {
        ExecuteCase::new(Arc::new(client), Arc::new(StaticBaseUrl(Some(BASE_URL))))
    }

    fn greeting_case() -> CaseSpec {
        let plan = TestPlan::backend();
        let Some(PlanStep::Case(greeting)) = plan.steps.into_iter().nth(3) else {
            unreachable!("fourth step is the greeting case");
        };
        greeting
    }

    fn root_case() -> CaseSpec {
        CaseSpec::new("get_root", "GET /api/", CaseRequest::get("/api/"))
            .with_assertion(Assertion::field_equals("message", "Hello World"))
    }

    #[tokio::test]
    async fn test_root_passes_on_greeting() {
        let client = ScriptedClient::default().with(
            "GET",
            "/api/",
            ResponseSpec::json(200, &json!({"message": "Hello World"})),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&root_case(), &reporter).await;

        assert!(outcome.passed());
        assert!(reporter.contains("url http://backend.test/api/"));
        assert!(reporter.contains("pass GET /api/"));
    }

    #[tokio::test]
    async fn test_wrong_message_is_shape_mismatch() {
        let client = ScriptedClient::default().with(
            "GET",
            "/api/",
            ResponseSpec::json(200, &json!({"message": "Hello"})),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&root_case(), &reporter).await;

        assert!(matches!(outcome.failure, Some(CaseFailure::ShapeMismatch(_))));
    }

    #[tokio::test]
    async fn test_missing_base_url_skips_request() {
        let client = Arc::new(ScriptedClient::default());
        let use_case = ExecuteCase::new(Arc::clone(&client), Arc::new(StaticBaseUrl(None)));
        let reporter = RecordingReporter::default();

        let outcome = use_case.execute(&root_case(), &reporter).await;

        assert!(matches!(outcome.failure, Some(CaseFailure::Config(_))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_contained() {
        let client = ScriptedClient::default().with_error(
            "GET",
            "/api/",
            HttpClientError::Timeout { timeout_ms: 10_000 },
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&root_case(), &reporter).await;

        assert_eq!(
            outcome.failure,
            Some(CaseFailure::Transport("request timed out after 10000ms".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let response = ResponseSpec::new(200, b"<h1>hi</h1>", Duration::ZERO);
        let client = ScriptedClient::default().with("GET", "/api/", response);
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&root_case(), &reporter).await;

        assert!(matches!(outcome.failure, Some(CaseFailure::MalformedBody(_))));
    }

    #[tokio::test]
    async fn test_status_checked_before_body() {
        let client = ScriptedClient::default().with(
            "GET",
            "/api/",
            ResponseSpec::json(201, &json!({"message": "Hello World"})),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&root_case(), &reporter).await;

        assert_eq!(outcome.failure, Some(CaseFailure::Status { status: 201 }));
    }

    #[tokio::test]
    async fn test_internal_server_error_prints_hint() {
        let client = ScriptedClient::default().with(
            "POST",
            "/api/chat",
            ResponseSpec::json(500, &json!({"detail": "boom"})),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&greeting_case(), &reporter).await;

        assert_eq!(outcome.failure, Some(CaseFailure::Status { status: 500 }));
        assert!(reporter.contains("note This might indicate an issue with the LLM integration"));
    }

    #[tokio::test]
    async fn test_other_server_errors_print_no_hint() {
        let client = ScriptedClient::default().with(
            "POST",
            "/api/chat",
            ResponseSpec::json(503, &json!({"detail": "unavailable"})),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&greeting_case(), &reporter).await;

        assert_eq!(outcome.failure, Some(CaseFailure::Status { status: 503 }));
        assert!(!reporter.contains("note "));
    }

    #[tokio::test]
    async fn test_observations_run_after_pass() {
        let case = CaseSpec::new(
            "get_status",
            "GET /api/status",
            CaseRequest::get("/api/status"),
        )
        .with_assertion(Assertion::IsArray)
        .with_observation(Observation::CountMatching {
            field: "client_name".to_string(),
            value: json!("qa"),
        });
        let client = ScriptedClient::default().with(
            "GET",
            "/api/status",
            ResponseSpec::json(200, &json!([{"client_name": "web"}])),
        );
        let reporter = RecordingReporter::default();

        let outcome = use_case(client).execute(&case, &reporter).await;

        assert!(outcome.passed());
        assert!(reporter.contains("note No entries with client_name == \"qa\" found"));
    }

}
