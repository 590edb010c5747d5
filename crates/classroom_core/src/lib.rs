//! Classroom Core Library
//!
//! Interactive smoke checks for the Interactive Classroom Platform API:
//! - A typed catalogue of the platform's routes
//! - A blocking HTTP client with bearer-token handling
//! - Suites of one-request checks (auth, users, workspaces, sessions, errors)
//! - A sequential runner that turns every failure into a report line
//!
//! # Quick Start
//!
//! ```no_run
//! use classroom_core::{
//!     ApiClient, Config, RecordingReporter, ScriptedPrompt, SuiteKind, SuitePlan, SuiteRunner,
//!     SuiteState,
//! };
//!
//! let config = Config::default();
//! let client = ApiClient::new(&config).unwrap();
//! let prompt = ScriptedPrompt::new().answer("123456");
//! let mut runner = SuiteRunner::new(client, prompt, RecordingReporter::default(), config.run.clone());
//!
//! let mut state = SuiteState::new(config.account.email_for("test_"), &config.account.password);
//! let report = runner.run(&SuitePlan::for_kind(SuiteKind::Full), &mut state);
//! println!("{}", report.summary());
//! std::process::exit(report.exit_code());
//! ```
//!
//! # Endpoints
//!
//! Routes know their method, path and success status:
//!
//! ```
//! use classroom_core::Endpoint;
//!
//! let route = Endpoint::ArchiveWorkspace(7);
//! assert_eq!(route.to_string(), "POST /workspaces/7/archive");
//! assert_eq!(route.success_status().as_u16(), 200);
//! assert_eq!(Endpoint::DeleteSession(3).success_status().as_u16(), 204);
//! ```

pub mod checks;
mod client;
mod config;
mod endpoint;
mod error;
mod interrupt;
mod models;
mod plan;
mod prompt;
mod report;
mod runner;

pub use client::{ApiClient, ApiReply};
pub use config::{
    generate_email, AccountConfig, Config, RunConfig, TargetConfig, ENV_BASE_URL, ENV_EMAIL,
    ENV_PASSWORD,
};
pub use endpoint::{CatalogEntry, Endpoint};
pub use error::{ProbeError, Result};
pub use interrupt::Interrupt;
pub use models::*;
pub use plan::{Check, CheckFn, SuiteKind, SuitePlan};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};
pub use report::{CheckOutcome, CheckRecord, RecordingReporter, Reporter, SuiteReport};
pub use runner::{outcome_from_error, CheckContext, SuiteRunner, SuiteState};

pub use reqwest::StatusCode;
