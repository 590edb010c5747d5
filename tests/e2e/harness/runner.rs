use super::assertions::Assertion;
use super::platform::{FakePlatform, Stub};
use super::steps::ScenarioStep;
use anyhow::{anyhow, bail, Context, Result};
use classroom_core::{
    ApiClient, ProbeError, Prompt, RecordingReporter, RunConfig, SuiteKind, SuitePlan,
    SuiteReport, SuiteRunner, SuiteState,
};
use std::collections::VecDeque;
use std::time::Duration;

/// One queued operator reaction.
#[derive(Debug, Clone)]
enum Answer {
    Text(String),
    Empty,
    Interrupt,
}

/// Operator stand-in that can also abort like Ctrl-C at a prompt.
#[derive(Debug, Default)]
struct ScenarioPrompt {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl Prompt for ScenarioPrompt {
    fn ask(&mut self, question: &str) -> classroom_core::Result<Option<String>> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(Some(text)),
            Some(Answer::Empty) | None => Ok(None),
            Some(Answer::Interrupt) => Err(ProbeError::Interrupted),
        }
    }
}

/// Executes scenarios against a mock platform
pub struct ScenarioRunner {
    platform: FakePlatform,
    answers: VecDeque<Answer>,
    state: SuiteState,
    report: Option<SuiteReport>,
    asked: Vec<String>,
    pauses: Vec<(Duration, String)>,
    current_step: usize,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            platform: FakePlatform::start(),
            answers: VecDeque::new(),
            state: SuiteState::new("teacher@example.com", "testpassword123"),
            report: None,
            asked: Vec::new(),
            pauses: Vec::new(),
            current_step: 0,
        }
    }

    /// Get current step number
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Execute all steps in sequence
    pub fn execute(&mut self, steps: &[ScenarioStep]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.current_step = i;
            self.execute_step(step)
                .with_context(|| format!("Step {}: {:?}", i, step))?;
        }
        Ok(())
    }

    fn execute_step(&mut self, step: &ScenarioStep) -> Result<()> {
        match step {
            ScenarioStep::HealthyPlatform => {
                for stub in FakePlatform::healthy_stubs() {
                    self.platform.install(&stub);
                }
                Ok(())
            }
            ScenarioStep::Stub(stub) => self.handle_stub(stub),

            ScenarioStep::OperatorAnswers { text } => {
                self.answers.push_back(Answer::Text(text.clone()));
                Ok(())
            }
            ScenarioStep::OperatorSkips => {
                self.answers.push_back(Answer::Empty);
                Ok(())
            }
            ScenarioStep::OperatorInterrupts => {
                self.answers.push_back(Answer::Interrupt);
                Ok(())
            }

            ScenarioStep::SeedToken { token } => {
                self.state.access_token = Some(token.clone());
                Ok(())
            }
            ScenarioStep::SeedWorkspace { id } => {
                self.state.workspace_id = Some(*id);
                Ok(())
            }
            ScenarioStep::UseEmail { email } => {
                self.state.email = email.clone();
                Ok(())
            }

            ScenarioStep::RunSuite { kind } => self.handle_run_suite(*kind),

            ScenarioStep::Assert { assertion } => self.handle_assertion(assertion),
        }
    }

    fn handle_stub(&mut self, stub: &Stub) -> Result<()> {
        self.platform.install(stub);
        Ok(())
    }

    fn handle_run_suite(&mut self, kind: SuiteKind) -> Result<()> {
        let client = ApiClient::with_timeout(&self.platform.api_base(), Duration::from_secs(5))?;
        let prompt = ScenarioPrompt {
            answers: std::mem::take(&mut self.answers),
            asked: Vec::new(),
        };
        let mut runner = SuiteRunner::new(
            client,
            prompt,
            RecordingReporter::default(),
            RunConfig::default(),
        );

        let report = runner.run(&SuitePlan::for_kind(kind), &mut self.state);

        self.asked.extend(runner.prompt().asked.iter().cloned());
        self.pauses
            .extend(runner.reporter().pauses.iter().cloned());
        self.report = Some(report);
        Ok(())
    }

    fn report(&self) -> Result<&SuiteReport> {
        self.report
            .as_ref()
            .ok_or_else(|| anyhow!("No suite has run yet"))
    }

    // ===== Assertion handlers =====

    fn handle_assertion(&mut self, assertion: &Assertion) -> Result<()> {
        match assertion {
            Assertion::CheckPassed(name) => {
                let record = self.record(name)?;
                if !record.outcome.is_pass() {
                    bail!("Expected '{}' to pass, got {:?}", name, record.outcome);
                }
                Ok(())
            }
            Assertion::CheckFailed {
                name,
                reason_contains,
            } => {
                let record = self.record(name)?;
                if !record.outcome.is_fail() {
                    bail!("Expected '{}' to fail, got {:?}", name, record.outcome);
                }
                if !record.outcome.message().contains(reason_contains.as_str()) {
                    bail!(
                        "Failure reason of '{}' is '{}', expected it to contain '{}'",
                        name,
                        record.outcome.message(),
                        reason_contains
                    );
                }
                Ok(())
            }
            Assertion::CheckSkipped(name) => {
                let record = self.record(name)?;
                if !record.outcome.is_skip() {
                    bail!("Expected '{}' to be skipped, got {:?}", name, record.outcome);
                }
                Ok(())
            }
            Assertion::CheckNotRun(name) => {
                let report = self.report()?;
                if !report.not_run.iter().any(|n| n == name) {
                    bail!(
                        "Expected '{}' to be left unexecuted; not run: {:?}",
                        name,
                        report.not_run
                    );
                }
                Ok(())
            }
            Assertion::DetailContains { name, text } => {
                let record = self.record(name)?;
                if !record
                    .outcome
                    .details()
                    .iter()
                    .any(|d| d.contains(text.as_str()))
                {
                    bail!(
                        "No detail of '{}' contains '{}': {:?}",
                        name,
                        text,
                        record.outcome.details()
                    );
                }
                Ok(())
            }

            Assertion::RecordCount(expected) => {
                let actual = self.report()?.records.len();
                if actual != *expected {
                    bail!("Expected {} executed checks, got {}", expected, actual);
                }
                Ok(())
            }
            Assertion::Summary(expected) => {
                let actual = self.report()?.summary();
                if actual != *expected {
                    bail!("Expected summary '{}', got '{}'", expected, actual);
                }
                Ok(())
            }
            Assertion::ExitCode(expected) => {
                let actual = self.report()?.exit_code();
                if actual != *expected {
                    bail!("Expected exit code {}, got {}", expected, actual);
                }
                Ok(())
            }
            Assertion::Interrupted => {
                if !self.report()?.interrupted {
                    bail!("Expected the run to be interrupted");
                }
                Ok(())
            }

            Assertion::TokenHeld(expected) => match &self.state.access_token {
                Some(token) if token == expected => Ok(()),
                other => bail!("Expected token {:?}, state holds {:?}", expected, other),
            },
            Assertion::NoToken => match &self.state.access_token {
                None => Ok(()),
                Some(token) => bail!("Expected no token, state holds {:?}", token),
            },
            Assertion::WorkspaceHeld(expected) => {
                if self.state.workspace_id != Some(*expected) {
                    bail!(
                        "Expected workspace {}, state holds {:?}",
                        expected,
                        self.state.workspace_id
                    );
                }
                Ok(())
            }
            Assertion::SessionHeld(expected) => {
                if self.state.session_id != Some(*expected) {
                    bail!(
                        "Expected session {}, state holds {:?}",
                        expected,
                        self.state.session_id
                    );
                }
                Ok(())
            }

            Assertion::Prompted(question) => {
                if !self.asked.iter().any(|q| q.contains(question.as_str())) {
                    bail!("Operator was never asked '{}': {:?}", question, self.asked);
                }
                Ok(())
            }
            Assertion::PromptCount(expected) => {
                if self.asked.len() != *expected {
                    bail!(
                        "Expected {} prompts, got {}: {:?}",
                        expected,
                        self.asked.len(),
                        self.asked
                    );
                }
                Ok(())
            }
            Assertion::Paused(expected) => {
                if self.pauses.len() != *expected {
                    bail!("Expected {} pauses, got {:?}", expected, self.pauses);
                }
                Ok(())
            }

            Assertion::StubHit { method, path } => {
                if !self.platform.was_hit(method, path) {
                    bail!("Platform never served {} {}", method, path);
                }
                Ok(())
            }
            Assertion::StubNotHit { method, path } => {
                if self.platform.was_hit(method, path) {
                    bail!("Platform unexpectedly served {} {}", method, path);
                }
                Ok(())
            }

            Assertion::Custom(check) => check(self.report()?),
        }
    }

    fn record(&self, name: &str) -> Result<&classroom_core::CheckRecord> {
        let report = self.report()?;
        report.record(name).ok_or_else(|| {
            anyhow!(
                "No record named '{}'; executed: {:?}",
                name,
                report.records.iter().map(|r| &r.name).collect::<Vec<_>>()
            )
        })
    }
}
