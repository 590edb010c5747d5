//! classroom-check - Smoke checks for the Interactive Classroom Platform API.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use classroom_core::{ProbeError, SuiteKind};
use console::style;
use std::path::PathBuf;

mod commands;
mod reporter;

#[derive(Parser)]
#[command(name = "classroom-check")]
#[command(about = "Interactive smoke checks for the classroom platform API", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./classroom.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a check suite against a live platform
    Run {
        /// Suite to run
        #[arg(value_enum)]
        suite: SuiteArg,
        #[command(flatten)]
        target: commands::run::TargetArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the endpoints the checks exercise
    Endpoints,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum SuiteArg {
    Full,
    Auth,
    Users,
    Workspaces,
    Sessions,
    Errors,
    Integration,
}

impl From<SuiteArg> for SuiteKind {
    fn from(arg: SuiteArg) -> Self {
        match arg {
            SuiteArg::Full => SuiteKind::Full,
            SuiteArg::Auth => SuiteKind::Auth,
            SuiteArg::Users => SuiteKind::Users,
            SuiteArg::Workspaces => SuiteKind::Workspaces,
            SuiteArg::Sessions => SuiteKind::Sessions,
            SuiteArg::Errors => SuiteKind::Errors,
            SuiteArg::Integration => SuiteKind::Integration,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    // Respects RUST_LOG (e.g. RUST_LOG=classroom_core=debug shows every request)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e
                .downcast_ref::<ProbeError>()
                .and_then(ProbeError::recovery_suggestion)
            {
                eprintln!("  {} {}", style("Tip:").cyan(), hint);
            }
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Run {
            suite,
            target,
            format,
        } => commands::run::run(config_path, suite.into(), &target, format),
        Commands::Endpoints => commands::endpoints::run().map(|_| 0),
        Commands::Config => commands::config::run(config_path).map(|_| 0),
    }
}
