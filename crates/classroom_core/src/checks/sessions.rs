//! Sessions inside a workspace: CRUD, start/stop, trash and restore.

use super::shown;
use super::workspaces::{restored_outcome, status_outcome};
use crate::error::Result;
use crate::models::SessionDraft;
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::CheckContext;

pub fn suite() -> Vec<Check> {
    vec![
        Check::new("Create Session", create),
        Check::new("List Sessions", list),
        Check::new("Get Session", get),
        Check::new("Update Session", update),
        Check::new("Start Session", start),
        Check::new("Stop Session", stop),
        Check::new("Delete Session (Soft Delete)", delete),
        Check::new("Restore Session from Trash", restore),
    ]
}

pub fn create(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    create_with(
        ctx,
        SessionDraft {
            name: "Test Session".to_string(),
            description: "This is a test session".to_string(),
        },
    )
}

/// Create a session in the run's workspace and remember its id.
pub(crate) fn create_with(ctx: &mut CheckContext<'_>, draft: SessionDraft) -> Result<CheckOutcome> {
    let workspace_id = ctx.workspace_id()?;
    let session = ctx.client.create_session(workspace_id, &draft)?;
    ctx.state.session_id = Some(session.id);

    Ok(CheckOutcome::pass(format!("Session created: {}", session.name))
        .with_detail(format!("Session ID: {}", session.id))
        .with_detail(format!("Status: {}", shown(session.status))))
}

pub fn list(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let workspace_id = ctx.workspace_id()?;
    let listing = ctx.client.list_sessions(workspace_id)?;

    let outcome = CheckOutcome::pass(format!("Found {} sessions", listing.total()));
    Ok(listing
        .sessions
        .into_iter()
        .take(ctx.run.list_preview)
        .fold(outcome, |outcome, s| {
            outcome.with_detail(format!(
                "- {} (ID: {}, Status: {})",
                s.name,
                s.id,
                shown(s.status)
            ))
        }))
}

pub fn get(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    let session = ctx.client.session(id)?;

    Ok(CheckOutcome::pass(format!("Session retrieved: {}", session.name))
        .with_detail(format!("Status: {}", shown(session.status))))
}

pub fn update(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    let draft = SessionDraft {
        name: "Updated Session Name".to_string(),
        description: "Updated description".to_string(),
    };
    let session = ctx.client.update_session(id, &draft)?;

    Ok(CheckOutcome::pass(format!("Session updated: {}", session.name)))
}

pub fn start(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    let reply = ctx.client.start_session(id)?;
    let started_at = reply.start_datetime.clone();

    Ok(status_outcome(reply, "Session started", "Start session failed")
        .with_detail(format!("Start time: {}", shown(started_at))))
}

pub fn stop(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    let reply = ctx.client.stop_session(id)?;
    Ok(status_outcome(reply, "Session stopped", "Stop session failed"))
}

pub fn delete(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    ctx.client.delete_session(id)?;
    Ok(CheckOutcome::pass("Session deleted (soft delete)"))
}

pub fn restore(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.session_id()?;
    let reply = ctx.client.restore_session(id)?;
    Ok(restored_outcome(reply, "Session restored from trash", "Restore session failed"))
}
