//! One user's first class: register through stopping a session.

use super::auth::{self, submit_code};
use super::{sessions, workspaces};
use crate::error::Result;
use crate::models::{SessionDraft, WorkspaceDraft};
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::CheckContext;

/// Seven steps; the plan stops at the first failure.
pub fn suite() -> Vec<Check> {
    vec![
        Check::new("Register", auth::register),
        Check::new("Verify Email", verify),
        Check::new("Login", auth::login),
        Check::new("Create Workspace", create_workspace),
        Check::new("Create Session", create_session),
        Check::new("Start Session", start_session),
        Check::new("Stop Session", sessions::stop),
    ]
}

fn verify(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    match ctx
        .prompt
        .ask("Enter verification code (or press Enter to skip): ")?
    {
        Some(code) => submit_code(ctx, &code),
        None => Ok(CheckOutcome::fail("Skipped (no code provided)")),
    }
}

fn create_workspace(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    workspaces::create_with(
        ctx,
        WorkspaceDraft {
            name: "Integration Test Workspace".to_string(),
            description: "Created during integration test".to_string(),
            session_settings: None,
        },
    )
}

fn create_session(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    sessions::create_with(
        ctx,
        SessionDraft {
            name: "Integration Test Session".to_string(),
            description: "Created during integration test".to_string(),
        },
    )
}

/// Start the session, then let it run briefly before the stop step.
fn start_session(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let outcome = sessions::start(ctx)?;
    if outcome.is_pass() {
        let pause = ctx.run.integration_pause();
        ctx.reporter.pause(pause, "Letting the session run");
    }
    Ok(outcome)
}
