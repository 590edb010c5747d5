//! Check outcomes, run reports, and the reporter hooks the runner calls.

use serde::Serialize;
use std::time::Duration;

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Expectation met.
    Pass {
        /// One-line summary shown next to the PASS marker.
        message: String,
        /// Indented detail lines (ids, statuses, names).
        details: Vec<String>,
    },

    /// Expectation not met, or the request could not be completed.
    Fail {
        /// Why the check failed.
        reason: String,
        /// Extra lines such as the response body.
        details: Vec<String>,
    },

    /// Check not applicable in this run (e.g. no access token).
    Skip {
        reason: String,
    },
}

impl CheckOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self::Pass {
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
            details: Vec::new(),
        }
    }

    pub fn skip(reason: impl Into<String>) -> Self {
        Self::Skip {
            reason: reason.into(),
        }
    }

    /// Append an indented detail line. Ignored for skips.
    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        match &mut self {
            Self::Pass { details, .. } | Self::Fail { details, .. } => details.push(line.into()),
            Self::Skip { .. } => {}
        }
        self
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip { .. })
    }

    /// The headline text: pass message, failure reason, or skip reason.
    pub fn message(&self) -> &str {
        match self {
            Self::Pass { message, .. } => message,
            Self::Fail { reason, .. } => reason,
            Self::Skip { reason } => reason,
        }
    }

    pub fn details(&self) -> &[String] {
        match self {
            Self::Pass { details, .. } | Self::Fail { details, .. } => details,
            Self::Skip { .. } => &[],
        }
    }
}

/// One executed check and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRecord {
    pub name: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Everything a suite run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    /// Suite title shown in the banner.
    pub suite: String,

    /// Executed checks in order.
    pub records: Vec<CheckRecord>,

    /// Checks not executed because an earlier failure stopped the run.
    pub not_run: Vec<String>,

    /// The operator aborted the run at a prompt.
    pub interrupted: bool,
}

impl SuiteReport {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            ..Self::default()
        }
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_fail()).count()
    }

    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_skip()).count()
    }

    /// Executed checks plus those left unexecuted.
    pub fn total(&self) -> usize {
        self.records.len() + self.not_run.len()
    }

    /// Returns true if any check failed, any was left unexecuted, or the run was aborted.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || !self.not_run.is_empty() || self.interrupted
    }

    /// Look up a record by check name.
    pub fn record(&self, name: &str) -> Option<&CheckRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Returns the `Total: P/T tests passed` line. Skips count as passed.
    pub fn summary(&self) -> String {
        format!(
            "Total: {}/{} tests passed",
            self.passed() + self.skipped(),
            self.total()
        )
    }

    /// Closing verdict line.
    pub fn verdict(&self) -> String {
        if self.interrupted {
            "Test interrupted by user".to_string()
        } else if self.has_failures() {
            let failing = self.total() - self.passed() - self.skipped();
            format!("{} test(s) failed", failing)
        } else {
            "All tests passed!".to_string()
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

/// Hooks through which the runner surfaces progress.
///
/// All methods default to doing nothing except [`Reporter::pause`], which sleeps.
pub trait Reporter {
    fn suite_started(&mut self, _suite: &str) {}

    fn check_started(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// Informational line printed while a check runs (e.g. before a prompt).
    fn note(&mut self, _line: &str) {}

    fn check_finished(&mut self, _record: &CheckRecord) {}

    /// Wait between two steps that must not run back to back.
    fn pause(&mut self, duration: Duration, _reason: &str) {
        std::thread::sleep(duration);
    }

    fn suite_finished(&mut self, _report: &SuiteReport) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn suite_started(&mut self, suite: &str) {
        (**self).suite_started(suite)
    }

    fn check_started(&mut self, index: usize, total: usize, name: &str) {
        (**self).check_started(index, total, name)
    }

    fn note(&mut self, line: &str) {
        (**self).note(line)
    }

    fn check_finished(&mut self, record: &CheckRecord) {
        (**self).check_finished(record)
    }

    fn pause(&mut self, duration: Duration, reason: &str) {
        (**self).pause(duration, reason)
    }

    fn suite_finished(&mut self, report: &SuiteReport) {
        (**self).suite_finished(report)
    }
}

/// Collects progress events in memory without sleeping.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub started: Vec<String>,
    pub finished: Vec<CheckRecord>,
    pub notes: Vec<String>,
    pub pauses: Vec<(Duration, String)>,
}

impl Reporter for RecordingReporter {
    fn check_started(&mut self, _index: usize, _total: usize, name: &str) {
        self.started.push(name.to_string());
    }

    fn note(&mut self, line: &str) {
        self.notes.push(line.to_string());
    }

    fn check_finished(&mut self, record: &CheckRecord) {
        self.finished.push(record.clone());
    }

    fn pause(&mut self, duration: Duration, reason: &str) {
        self.pauses.push((duration, reason.to_string()));
    }
}
