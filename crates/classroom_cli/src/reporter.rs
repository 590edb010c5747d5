//! Console rendering of a suite run.

use chrono::Local;
use classroom_core::{CheckOutcome, CheckRecord, Reporter, SuiteReport};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RULE_WIDTH: usize = 60;

/// Prints banners, per-check results and the closing summary.
///
/// With `to_stderr` set (JSON output) everything goes to stderr so stdout
/// carries only the machine-readable report.
pub struct ConsoleReporter {
    api_base: String,
    email: String,
    to_stderr: bool,
}

impl ConsoleReporter {
    pub fn new(api_base: String, email: String, to_stderr: bool) -> Self {
        Self {
            api_base,
            email,
            to_stderr,
        }
    }

    fn line(&self, text: impl AsRef<str>) {
        if self.to_stderr {
            eprintln!("{}", text.as_ref());
        } else {
            println!("{}", text.as_ref());
        }
    }

    fn rule(&self) {
        self.line("=".repeat(RULE_WIDTH));
    }

    fn banner(&self, title: &str) {
        self.line("");
        self.rule();
        self.line(title);
        self.rule();
    }
}

impl Reporter for ConsoleReporter {
    fn suite_started(&mut self, suite: &str) {
        self.banner(suite);
        self.line(format!("Base URL: {}", style(&self.api_base).cyan()));
        self.line(format!("Test Email: {}", style(&self.email).cyan()));
        self.line(format!(
            "Started: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
    }

    fn check_started(&mut self, index: usize, total: usize, name: &str) {
        self.banner(&format!("TEST [{}/{}]: {}", index + 1, total, name));
    }

    fn note(&mut self, line: &str) {
        self.line(format!("  {} {}", style("→").cyan(), line));
    }

    fn check_finished(&mut self, record: &CheckRecord) {
        let headline = match &record.outcome {
            CheckOutcome::Pass { message, .. } => {
                format!("{} {}", style("✓ PASS:").green().bold(), message)
            }
            CheckOutcome::Fail { reason, .. } => {
                format!("{} {}", style("✗ FAIL:").red().bold(), reason)
            }
            CheckOutcome::Skip { reason } => {
                format!("{} {}", style("⊘ SKIP:").yellow().bold(), reason)
            }
        };
        self.line(headline);
        for detail in record.outcome.details() {
            self.line(format!("  {}", detail));
        }
    }

    fn pause(&mut self, duration: Duration, reason: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("{} ({}s)...", reason, duration.as_secs_f32()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        std::thread::sleep(duration);
        spinner.finish_and_clear();
    }

    fn suite_finished(&mut self, report: &SuiteReport) {
        self.banner("TEST SUMMARY");
        for record in &report.records {
            let marker = match &record.outcome {
                CheckOutcome::Pass { .. } => style("PASS").green(),
                CheckOutcome::Fail { .. } => style("FAIL").red(),
                CheckOutcome::Skip { .. } => style("SKIP").yellow(),
            };
            self.line(format!("{}: {}", marker, record.name));
        }
        for name in &report.not_run {
            self.line(format!("{}: {}", style("NOT RUN").dim(), name));
        }

        self.rule();
        self.line(report.summary());
        self.rule();

        let verdict = report.verdict();
        if report.has_failures() {
            self.line(format!("{} {}", style("×").red(), style(verdict).red().bold()));
        } else {
            self.line(format!("{} {}", style("✓").green(), style(verdict).green().bold()));
        }
    }
}
