//! Console reporter.
//!
//! Prints the run as plain text. The summary ends with one
//! `<name>: PASS` or `<name>: FAIL` line per result entry.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use probe_application::ports::Reporter;
use probe_domain::{CaseFailure, Note, NoteLevel, RequestSpec, ResponseSpec, ResultSet, TestPlan};

const RULE_WIDTH: usize = 50;

/// Writes progress lines to any [`Write`] sink.
///
/// Write errors are ignored: losing console output must not change the
/// verdict of a run.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    /// Reporter printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter printing to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn out(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, text: impl AsRef<str>) {
        let _ = writeln!(self.out(), "{}", text.as_ref());
    }

    fn rule(&self) {
        self.line("=".repeat(RULE_WIDTH));
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn run_started(&self, plan: &TestPlan) {
        self.line(format!("Starting Backend API Tests ({} checks)", plan.len()));
        self.rule();
    }

    fn case_started(&self, title: &str) {
        self.line(format!("\n=== Testing {title} ==="));
    }

    fn request_sent(&self, request: &RequestSpec) {
        self.line(format!("Testing URL: {}", request.url));
    }

    fn response_received(&self, response: &ResponseSpec) {
        self.line(format!("Status Code: {}", response.status));
        self.line(format!("Response: {}", response.body));
    }

    fn case_passed(&self, title: &str) {
        self.line(format!("[PASS] {title} test PASSED"));
    }

    fn case_failed(&self, title: &str, failure: &CaseFailure) {
        self.line(format!("[FAIL] {title} test FAILED - {failure}"));
    }

    fn note(&self, note: &Note) {
        let tag = match note.level {
            NoteLevel::Info => "[INFO]",
            NoteLevel::Warn => "[WARN]",
        };
        self.line(format!("{tag} {note}"));
    }

    fn summary(&self, results: &ResultSet) {
        self.line("");
        self.rule();
        self.line("TEST SUMMARY");
        self.rule();

        for (name, passed) in results.iter() {
            self.line(format!("{name}: {}", if passed { "PASS" } else { "FAIL" }));
        }

        self.line(format!(
            "\nOverall: {}/{} tests passed",
            results.passed(),
            results.total()
        ));
        if results.all_passed() {
            self.line("All backend tests PASSED!");
        } else {
            self.line("Some backend tests FAILED!");
        }

        let _ = self.out().flush();
    }
}
