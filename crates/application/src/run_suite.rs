//! Run Suite Use Case
//!
//! Runs every step of a [`TestPlan`] in order and aggregates the verdicts.

use probe_domain::{CaseFailure, CaseOutcome, CompositeSpec, PlanStep, ResultSet, TestPlan};

use crate::ApplicationResult;
use crate::execute_case::ExecuteCase;
use crate::ports::{BaseUrlSource, HttpClient, Reporter};

/// Orchestrates a whole run.
///
/// Steps run strictly one after another. There is no early exit: a failing
/// case is recorded and the next step starts. Composite checks print
/// nothing of their own; their verdict only shows in the summary.
pub struct RunSuite<C, S, R> {
    executor: ExecuteCase<C, S>,
    reporter: R,
}

impl<C: HttpClient, S: BaseUrlSource, R: Reporter> RunSuite<C, S, R> {
    /// Creates the orchestrator.
    pub const fn new(executor: ExecuteCase<C, S>, reporter: R) -> Self {
        Self { executor, reporter }
    }

    /// Consumes the orchestrator and returns the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs the plan and returns the result of every step.
    ///
    /// # Errors
    ///
    /// Returns an error only when the plan itself is invalid (duplicate
    /// names, composite checks referencing cases that do not run before
    /// them). Nothing is executed in that case.
    pub async fn run(&self, plan: &TestPlan) -> ApplicationResult<ResultSet> {
        plan.validate()?;
        tracing::info!(steps = plan.len(), "starting run");
        self.reporter.run_started(plan);

        let mut results = ResultSet::new();
        for step in &plan.steps {
            let outcome = match step {
                PlanStep::Case(case) => self.executor.execute(case, &self.reporter).await,
                PlanStep::Composite(composite) => evaluate_composite(composite, &results),
            };
            results.record_outcome(&outcome)?;
        }

        tracing::info!(
            passed = results.passed(),
            total = results.total(),
            "run finished"
        );
        self.reporter.summary(&results);
        Ok(results)
    }

    #[cfg(test)]
    pub(crate) const fn reporter(&self) -> &R {
        &self.reporter
    }
}

fn evaluate_composite(composite: &CompositeSpec, results: &ResultSet) -> CaseOutcome {
    let failed: Vec<String> = composite
        .members
        .iter()
        .filter(|member| results.get(member) != Some(true))
        .cloned()
        .collect();

    if failed.is_empty() {
        tracing::debug!(check = %composite.title, "composite check passed");
        CaseOutcome::pass(&composite.name)
    } else {
        let failure = CaseFailure::Composite { failed };
        tracing::debug!(check = %composite.title, %failure, "composite check failed");
        CaseOutcome::fail(&composite.name, failure)
    }
}
