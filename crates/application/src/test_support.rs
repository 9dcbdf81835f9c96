//! Test doubles shared by the use case tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use probe_domain::{CaseFailure, Note, RequestSpec, ResponseSpec, ResultSet, TestPlan};

use crate::ports::{BaseUrlSource, ConfigError, HttpClient, HttpClientError, Reporter};

pub const BASE_URL: &str = "http://backend.test";

/// Base URL source returning a fixed value.
pub struct StaticBaseUrl(pub Option<&'static str>);

impl BaseUrlSource for StaticBaseUrl {
    fn resolve(&self) -> Result<String, ConfigError> {
        self.0.map(ToString::to_string).ok_or_else(|| ConfigError::KeyNotFound {
            key: "EXPO_PUBLIC_BACKEND_URL".to_string(),
            path: "/app/frontend/.env".into(),
        })
    }
}

/// HTTP client answering from a table keyed by `METHOD url`.
#[derive(Default)]
pub struct ScriptedClient {
    responses: HashMap<String, Result<ResponseSpec, HttpClientError>>,
    pub calls: Mutex<Vec<RequestSpec>>,
}

impl ScriptedClient {
    pub fn with(mut self, method: &str, path: &str, response: ResponseSpec) -> Self {
        self.responses
            .insert(format!("{method} {BASE_URL}{path}"), Ok(response));
        self
    }

    pub fn with_error(mut self, method: &str, path: &str, error: HttpClientError) -> Self {
        self.responses
            .insert(format!("{method} {BASE_URL}{path}"), Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }
}

impl HttpClient for ScriptedClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        let key = format!("{} {}", request.method, request.url);
        let result = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(HttpClientError::ConnectionRefused {
                    host: "backend.test".to_string(),
                    port: 80,
                })
            });
        async move { result }
    }
}

/// Reporter that keeps every event as a line of text.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&self, plan: &TestPlan) {
        self.push(format!("start {}", plan.len()));
    }

    fn case_started(&self, title: &str) {
        self.push(format!("case {title}"));
    }

    fn request_sent(&self, request: &RequestSpec) {
        self.push(format!("url {}", request.url));
    }

    fn response_received(&self, response: &ResponseSpec) {
        self.push(format!("status {}", response.status.as_u16()));
    }

    fn case_passed(&self, title: &str) {
        self.push(format!("pass {title}"));
    }

    fn case_failed(&self, title: &str, failure: &CaseFailure) {
        self.push(format!("fail {title}: {failure}"));
    }

    fn note(&self, note: &Note) {
        self.push(format!("note {}", note.message));
    }

    fn summary(&self, results: &ResultSet) {
        self.push(format!("summary {}/{}", results.passed(), results.total()));
    }
}
