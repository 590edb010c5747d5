use super::assertions::Assertion;
use super::platform::Stub;
use super::runner::ScenarioRunner;
use super::steps::ScenarioStep;
use classroom_core::SuiteKind;
use serde_json::Value;

/// Fluent DSL for building test scenarios
pub struct Scenario {
    name: String,
    steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Create a new scenario with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
        }
    }

    // ===== Platform setup =====

    /// Every route the suites use answers successfully
    pub fn healthy_platform(mut self) -> Self {
        self.steps.push(ScenarioStep::HealthyPlatform);
        self
    }

    /// Answer `method path` with a canned status and JSON body
    pub fn platform_answers(mut self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.steps
            .push(ScenarioStep::Stub(Stub::new(method, path, status, body)));
        self
    }

    /// Like `platform_answers`, but only for requests whose body contains `request`
    pub fn platform_answers_request(
        mut self,
        method: &str,
        path: &str,
        request: Value,
        status: u16,
        body: Value,
    ) -> Self {
        self.steps.push(ScenarioStep::Stub(
            Stub::new(method, path, status, body).requiring(request),
        ));
        self
    }

    /// Like `platform_answers`, but only for requests carrying `token`
    pub fn platform_answers_bearer(
        mut self,
        method: &str,
        path: &str,
        token: &str,
        status: u16,
        body: Value,
    ) -> Self {
        self.steps.push(ScenarioStep::Stub(
            Stub::new(method, path, status, body).bearer(token),
        ));
        self
    }

    /// Like `platform_answers`, but only for requests without an Authorization header
    pub fn platform_answers_anonymous(
        mut self,
        method: &str,
        path: &str,
        status: u16,
        body: Value,
    ) -> Self {
        self.steps.push(ScenarioStep::Stub(
            Stub::new(method, path, status, body).anonymous(),
        ));
        self
    }

    // ===== Operator =====

    /// Queue an answer for the next prompt
    pub fn operator_answers(mut self, text: &str) -> Self {
        self.steps.push(ScenarioStep::OperatorAnswers {
            text: text.to_string(),
        });
        self
    }

    /// Queue an empty answer (operator presses Enter)
    pub fn operator_skips(mut self) -> Self {
        self.steps.push(ScenarioStep::OperatorSkips);
        self
    }

    /// Queue a Ctrl-C at the next prompt
    pub fn operator_interrupts(mut self) -> Self {
        self.steps.push(ScenarioStep::OperatorInterrupts);
        self
    }

    // ===== Starting state =====

    pub fn with_token(mut self, token: &str) -> Self {
        self.steps.push(ScenarioStep::SeedToken {
            token: token.to_string(),
        });
        self
    }

    pub fn with_workspace(mut self, id: i64) -> Self {
        self.steps.push(ScenarioStep::SeedWorkspace { id });
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.steps.push(ScenarioStep::UseEmail {
            email: email.to_string(),
        });
        self
    }

    // ===== Execution =====

    /// Run a suite; queued operator answers are consumed by it
    pub fn run_suite(mut self, kind: SuiteKind) -> Self {
        self.steps.push(ScenarioStep::RunSuite { kind });
        self
    }

    // ===== Assertions =====

    /// Add a custom assertion
    pub fn assert(mut self, assertion: Assertion) -> Self {
        self.steps.push(ScenarioStep::Assert { assertion });
        self
    }

    pub fn assert_passed(self, check: &str) -> Self {
        self.assert(Assertion::CheckPassed(check.to_string()))
    }

    pub fn assert_failed(self, check: &str, reason_contains: &str) -> Self {
        self.assert(Assertion::CheckFailed {
            name: check.to_string(),
            reason_contains: reason_contains.to_string(),
        })
    }

    pub fn assert_skipped(self, check: &str) -> Self {
        self.assert(Assertion::CheckSkipped(check.to_string()))
    }

    pub fn assert_not_run(self, check: &str) -> Self {
        self.assert(Assertion::CheckNotRun(check.to_string()))
    }

    pub fn assert_detail(self, check: &str, text: &str) -> Self {
        self.assert(Assertion::DetailContains {
            name: check.to_string(),
            text: text.to_string(),
        })
    }

    pub fn assert_summary(self, summary: &str) -> Self {
        self.assert(Assertion::Summary(summary.to_string()))
    }

    pub fn assert_exit_code(self, code: i32) -> Self {
        self.assert(Assertion::ExitCode(code))
    }

    pub fn assert_token(self, token: &str) -> Self {
        self.assert(Assertion::TokenHeld(token.to_string()))
    }

    pub fn assert_prompted(self, question: &str) -> Self {
        self.assert(Assertion::Prompted(question.to_string()))
    }

    pub fn assert_hit(self, method: &str, path: &str) -> Self {
        self.assert(Assertion::StubHit {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    pub fn assert_not_hit(self, method: &str, path: &str) -> Self {
        self.assert(Assertion::StubNotHit {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    /// Execute the scenario and return results
    pub fn run(self) -> ScenarioResult {
        let mut runner = ScenarioRunner::new();

        match runner.execute(&self.steps) {
            Ok(()) => ScenarioResult {
                name: self.name,
                success: true,
                steps_executed: self.steps.len(),
                failure_step: None,
                error: None,
            },
            Err(e) => {
                let failure_step = runner.current_step();
                ScenarioResult {
                    name: self.name,
                    success: false,
                    steps_executed: failure_step,
                    failure_step: Some(failure_step),
                    error: Some(format!("{:?}", e)),
                }
            }
        }
    }
}

/// Result of running a scenario
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub steps_executed: usize,
    pub failure_step: Option<usize>,
    pub error: Option<String>,
}

impl ScenarioResult {
    /// Unwrap the result, panicking if it failed
    pub fn unwrap(self) {
        if !self.success {
            panic!(
                "Scenario '{}' failed at step {}: {}",
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    /// Expect the result to be successful
    pub fn expect(self, msg: &str) {
        if !self.success {
            panic!(
                "{}: Scenario '{}' failed at step {}: {}",
                msg,
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }
}
