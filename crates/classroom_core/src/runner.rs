//! Sequential execution of a suite plan.

use crate::client::ApiClient;
use crate::config::RunConfig;
use crate::error::{ProbeError, Result};
use crate::interrupt::Interrupt;
use crate::models::ResourceId;
use crate::plan::SuitePlan;
use crate::prompt::Prompt;
use crate::report::{CheckOutcome, CheckRecord, Reporter, SuiteReport};
use tracing::{info, warn};

/// Values carried from one check to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteState {
    pub email: String,
    pub password: String,
    pub access_token: Option<String>,
    pub user_id: Option<ResourceId>,
    pub workspace_id: Option<ResourceId>,
    pub session_id: Option<ResourceId>,
    /// Verification code entered before the check that consumes it.
    pub pending_code: Option<String>,
}

impl SuiteState {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_workspace(mut self, id: ResourceId) -> Self {
        self.workspace_id = Some(id);
        self
    }
}

/// Everything a check may touch.
pub struct CheckContext<'a> {
    pub client: &'a mut ApiClient,
    pub state: &'a mut SuiteState,
    pub prompt: &'a mut dyn Prompt,
    pub reporter: &'a mut dyn Reporter,
    pub run: &'a RunConfig,
}

impl CheckContext<'_> {
    /// Remember a freshly issued token and send it from now on.
    pub fn adopt_token(&mut self, token: &str) {
        self.state.access_token = Some(token.to_string());
        self.client.set_token(token);
    }

    pub fn workspace_id(&self) -> Result<ResourceId> {
        self.state
            .workspace_id
            .ok_or(ProbeError::MissingState("workspace ID"))
    }

    pub fn session_id(&self) -> Result<ResourceId> {
        self.state
            .session_id
            .ok_or(ProbeError::MissingState("session ID"))
    }

    pub fn has_token(&self) -> bool {
        self.state.access_token.is_some()
    }

    /// Print an informational line before the check's outcome.
    pub fn note(&mut self, line: &str) {
        self.reporter.note(line);
    }
}

/// Runs plans against one platform with one prompt and one reporter.
pub struct SuiteRunner<P, R> {
    client: ApiClient,
    prompt: P,
    reporter: R,
    run: RunConfig,
    interrupt: Interrupt,
}

impl<P: Prompt, R: Reporter> SuiteRunner<P, R> {
    pub fn new(client: ApiClient, prompt: P, reporter: R, run: RunConfig) -> Self {
        Self {
            client,
            prompt,
            reporter,
            run,
            interrupt: Interrupt::new(),
        }
    }

    /// Stop before the next check once `interrupt` is triggered.
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Execute every check of `plan` in order, threading `state` through them.
    ///
    /// Check errors become failed records; only an interrupt ends the run early
    /// (or any failure when the plan stops on failure).
    pub fn run(&mut self, plan: &SuitePlan, state: &mut SuiteState) -> SuiteReport {
        let mut report = SuiteReport::new(plan.kind.title());
        self.reporter.suite_started(plan.kind.title());

        match &state.access_token {
            Some(token) => self.client.set_token(token.clone()),
            None => self.client = self.client.without_token(),
        }

        let total = plan.len();
        for (index, check) in plan.checks.iter().enumerate() {
            if self.interrupt.is_triggered() {
                warn!(check = check.name, "run interrupted between checks");
                report.interrupted = true;
                break;
            }

            if plan.stop_on_failure && report.failed() > 0 {
                report.not_run.push(check.name.to_string());
                continue;
            }

            self.reporter.check_started(index, total, check.name);

            let result = {
                let mut ctx = CheckContext {
                    client: &mut self.client,
                    state: &mut *state,
                    prompt: &mut self.prompt,
                    reporter: &mut self.reporter,
                    run: &self.run,
                };
                (check.run)(&mut ctx)
            };

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) if e.is_interrupt() => {
                    warn!(check = check.name, "run interrupted at prompt");
                    report.interrupted = true;
                    break;
                }
                Err(e) => outcome_from_error(&e),
            };

            info!(
                suite = %plan.kind,
                check = check.name,
                passed = outcome.is_pass(),
                skipped = outcome.is_skip(),
                "check finished"
            );

            let record = CheckRecord {
                name: check.name.to_string(),
                outcome,
            };
            self.reporter.check_finished(&record);
            report.records.push(record);
        }

        self.reporter.suite_finished(&report);
        report
    }
}

/// Turn a check error into the failed line the report shows.
pub fn outcome_from_error(error: &ProbeError) -> CheckOutcome {
    let outcome = CheckOutcome::fail(error.to_string());
    match error {
        ProbeError::UnexpectedStatus { body, .. } if !body.is_empty() => {
            outcome.with_detail(format!("Response: {}", body))
        }
        _ => match error.recovery_suggestion() {
            Some(hint) => outcome.with_detail(hint),
            None => outcome,
        },
    }
}
