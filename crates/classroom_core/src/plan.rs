//! Suites as ordered lists of named checks.

use crate::checks;
use crate::error::{ProbeError, Result};
use crate::report::CheckOutcome;
use crate::runner::CheckContext;
use std::fmt;
use std::str::FromStr;

/// Body of a check: one request, one expectation.
pub type CheckFn = fn(&mut CheckContext<'_>) -> Result<CheckOutcome>;

/// A named check.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub run: CheckFn,
}

impl Check {
    pub const fn new(name: &'static str, run: CheckFn) -> Self {
        Self { name, run }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check({:?})", self.name)
    }
}

/// The suites the tool knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteKind {
    /// Registration through restore, in one sitting.
    Full,
    Auth,
    Users,
    Workspaces,
    Sessions,
    /// Negative cases: validation, duplicates, auth and missing resources.
    Errors,
    /// Register to stop-session as one flow, halting at the first failure.
    Integration,
}

impl SuiteKind {
    pub const ALL: [SuiteKind; 7] = [
        SuiteKind::Full,
        SuiteKind::Auth,
        SuiteKind::Users,
        SuiteKind::Workspaces,
        SuiteKind::Sessions,
        SuiteKind::Errors,
        SuiteKind::Integration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuiteKind::Full => "full",
            SuiteKind::Auth => "auth",
            SuiteKind::Users => "users",
            SuiteKind::Workspaces => "workspaces",
            SuiteKind::Sessions => "sessions",
            SuiteKind::Errors => "errors",
            SuiteKind::Integration => "integration",
        }
    }

    /// Banner title.
    pub fn title(&self) -> &'static str {
        match self {
            SuiteKind::Full => "Interactive Classroom Platform API Test Suite",
            SuiteKind::Auth => "Authentication Tests",
            SuiteKind::Users => "User Profile Tests",
            SuiteKind::Workspaces => "Workspace Tests",
            SuiteKind::Sessions => "Session Tests",
            SuiteKind::Errors => "Error Handling Tests",
            SuiteKind::Integration => "Complete Integration Test",
        }
    }

    /// Prefix of generated test emails, so runs are told apart in the platform's logs.
    pub fn email_prefix(&self) -> &'static str {
        match self {
            SuiteKind::Auth => "test_auth_",
            SuiteKind::Integration => "test_integration_",
            _ => "test_",
        }
    }

    /// The suite cannot start without a bearer token.
    pub fn needs_token(&self) -> bool {
        matches!(
            self,
            SuiteKind::Users | SuiteKind::Workspaces | SuiteKind::Sessions
        )
    }

    /// The suite cannot start without a workspace to put sessions in.
    pub fn needs_workspace(&self) -> bool {
        matches!(self, SuiteKind::Sessions)
    }

    /// The token is optional; checks that need it are skipped without one.
    pub fn accepts_token(&self) -> bool {
        self.needs_token() || matches!(self, SuiteKind::Errors)
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiteKind {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        SuiteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProbeError::ConfigError(format!("unknown suite '{}'", s)))
    }
}

/// An ordered list of checks plus how to react to failures.
#[derive(Debug, Clone)]
pub struct SuitePlan {
    pub kind: SuiteKind,
    pub checks: Vec<Check>,
    /// Leave the remaining checks unexecuted after the first failure.
    pub stop_on_failure: bool,
}

impl SuitePlan {
    /// The plan for a suite.
    pub fn for_kind(kind: SuiteKind) -> Self {
        let (checks, stop_on_failure) = match kind {
            SuiteKind::Full => (checks::full_suite(), false),
            SuiteKind::Auth => (checks::auth::suite(), false),
            SuiteKind::Users => (checks::users::suite(), false),
            SuiteKind::Workspaces => (checks::workspaces::suite(), false),
            SuiteKind::Sessions => (checks::sessions::suite(), false),
            SuiteKind::Errors => (checks::errors::suite(), false),
            SuiteKind::Integration => (checks::integration::suite(), true),
        };
        Self {
            kind,
            checks,
            stop_on_failure,
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name).collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
