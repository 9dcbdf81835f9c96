//! Progress reporting port

use probe_domain::{CaseFailure, Note, RequestSpec, ResponseSpec, ResultSet, TestPlan};

/// Receives progress events while a plan runs.
///
/// Events arrive strictly in execution order from a single task.
pub trait Reporter: Send + Sync {
    /// A run is about to start.
    fn run_started(&self, plan: &TestPlan);

    /// A case is starting.
    fn case_started(&self, title: &str);

    /// A request is about to be sent.
    fn request_sent(&self, request: &RequestSpec);

    /// A response arrived.
    fn response_received(&self, response: &ResponseSpec);

    /// The current case passed.
    fn case_passed(&self, title: &str);

    /// The current case failed.
    fn case_failed(&self, title: &str, failure: &CaseFailure);

    /// Informational line for the current case.
    fn note(&self, note: &Note);

    /// All steps finished.
    fn summary(&self, results: &ResultSet);
}
