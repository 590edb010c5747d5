//! Run a check suite against a live platform.

use crate::reporter::ConsoleReporter;
use crate::OutputFormat;
use anyhow::{Context, Result};
use classroom_core::{
    ApiClient, Config, Interrupt, ProbeError, Prompt, ResourceId, ScriptedPrompt, StdinPrompt,
    SuiteKind, SuitePlan, SuiteRunner, SuiteState,
};
use clap::Args;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

const INTERRUPTED: &str = "Test interrupted by user";

/// Overrides for where and as whom the suite runs.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Platform root URL (overrides config and CLASSROOM_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
    /// Prefix between the root URL and every route
    #[arg(long)]
    pub api_prefix: Option<String>,
    /// Email for the test account (generated per run when absent)
    #[arg(long)]
    pub email: Option<String>,
    /// Password for the test account
    #[arg(long)]
    pub password: Option<String>,
    /// Access token for suites that start logged in
    #[arg(long)]
    pub token: Option<String>,
    /// Workspace the session suite works in
    #[arg(long)]
    pub workspace_id: Option<ResourceId>,
    /// Verification code(s) to answer code prompts with, in order; disables interactive input
    #[arg(long = "code")]
    pub codes: Vec<String>,
}

impl TargetArgs {
    /// Layer the flags over the file and environment configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.target.base_url = url.clone();
        }
        if let Some(prefix) = &self.api_prefix {
            config.target.api_prefix = prefix.clone();
        }
        if let Some(email) = &self.email {
            config.account.email = Some(email.clone());
        }
        if let Some(password) = &self.password {
            config.account.password = password.clone();
        }
    }
}

/// Run `kind` and return the process exit code.
pub fn run(
    config_path: Option<&Path>,
    kind: SuiteKind,
    args: &TargetArgs,
    format: OutputFormat,
) -> Result<i32> {
    let mut config = super::load_config(config_path)?;
    args.apply(&mut config);
    config.validate()?;

    let client = ApiClient::new(&config).context("failed to build HTTP client")?;
    let interrupt = Interrupt::new();
    install_ctrl_c(&interrupt);

    let mut prompt = operator_prompt(args, format, &interrupt);
    let mut state = match seed_state(&config, kind, args, prompt.as_mut()) {
        Ok(state) => state,
        Err(e) if e.downcast_ref::<ProbeError>().is_some_and(ProbeError::is_interrupt) => {
            eprintln!("\n{}", INTERRUPTED);
            return Ok(1);
        }
        Err(e) => return Err(e),
    };
    debug!(suite = %kind, email = %state.email, "starting suite");

    let reporter = ConsoleReporter::new(
        config.api_base(),
        state.email.clone(),
        format == OutputFormat::Json,
    );
    let mut runner = SuiteRunner::new(client, prompt, reporter, config.run.clone())
        .with_interrupt(interrupt);

    let report = runner.run(&SuitePlan::for_kind(kind), &mut state);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report.exit_code())
}

/// First Ctrl-C lets the runner stop cleanly; a second one exits at once.
fn install_ctrl_c(interrupt: &Interrupt) {
    let flag = interrupt.clone();
    let installed = ctrlc::set_handler(move || {
        if flag.trigger() {
            eprintln!("\n{}", INTERRUPTED);
            std::process::exit(1);
        }
    });
    if let Err(e) = installed {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}

/// Scripted when codes were passed on the command line, the console otherwise.
///
/// JSON output keeps stdout for the report, so questions go to stderr there.
fn operator_prompt(
    args: &TargetArgs,
    format: OutputFormat,
    interrupt: &Interrupt,
) -> Box<dyn Prompt> {
    if !args.codes.is_empty() {
        let scripted = args
            .codes
            .iter()
            .fold(ScriptedPrompt::new(), |prompt, code| prompt.answer(code));
        return Box::new(scripted);
    }
    match format {
        OutputFormat::Text => Box::new(StdinPrompt::stdin().with_interrupt(interrupt.clone())),
        OutputFormat::Json => Box::new(
            StdinPrompt::new(io::BufReader::new(io::stdin()), io::stderr())
                .with_interrupt(interrupt.clone()),
        ),
    }
}

/// Build the starting state, asking for whatever the suite needs but was not given.
///
/// `--code` answers verification prompts only; with it the token and workspace
/// must come from flags.
fn seed_state(
    config: &Config,
    kind: SuiteKind,
    args: &TargetArgs,
    prompt: &mut dyn Prompt,
) -> Result<SuiteState> {
    if args.codes.is_empty() {
        ask_for_state(config, kind, args, prompt)
    } else {
        ask_for_state(config, kind, args, &mut ScriptedPrompt::new())
    }
}

fn ask_for_state(
    config: &Config,
    kind: SuiteKind,
    args: &TargetArgs,
    prompt: &mut dyn Prompt,
) -> Result<SuiteState> {
    let email = config.account.email_for(kind.email_prefix());
    let mut state = SuiteState::new(email, config.account.password.clone());

    if kind.needs_token() {
        let token = match &args.token {
            Some(token) => token.clone(),
            None => prompt.require("Enter access token: ", "Access token")?,
        };
        state = state.with_token(token);
    } else if kind.accepts_token() {
        let token = match &args.token {
            Some(token) => Some(token.clone()),
            None => prompt.ask("Enter access token (or press Enter to skip auth tests): ")?,
        };
        if let Some(token) = token {
            state = state.with_token(token);
        }
    }

    if kind.needs_workspace() {
        let id = match args.workspace_id {
            Some(id) => id,
            None => parse_workspace_id(&prompt.require("Enter workspace ID: ", "Workspace ID")?)?,
        };
        state = state.with_workspace(id);
    }

    Ok(state)
}

fn parse_workspace_id(answer: &str) -> Result<ResourceId> {
    answer.parse().map_err(|_| {
        ProbeError::ConfigError(format!("workspace ID must be a number, got '{}'", answer)).into()
    })
}
