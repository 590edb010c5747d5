//! Workspace CRUD plus the archive and trash lifecycle.

use super::shown;
use crate::error::Result;
use crate::models::{StatusReply, WorkspaceDraft};
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::CheckContext;
use serde_json::json;

pub fn suite() -> Vec<Check> {
    vec![
        Check::new("Create Workspace", create),
        Check::new("List Workspaces", list),
        Check::new("Get Workspace", get),
        Check::new("Update Workspace", update),
        Check::new("Archive Workspace", archive),
        Check::new("Unarchive Workspace", unarchive),
        Check::new("Delete Workspace (Soft Delete)", delete),
        Check::new("Restore Workspace from Trash", restore),
    ]
}

pub fn create(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    create_with(
        ctx,
        WorkspaceDraft {
            name: "Test Workspace".to_string(),
            description: "This is a test workspace".to_string(),
            session_settings: Some(json!({ "anonymous_mode": true })),
        },
    )
}

/// Create a workspace and remember its id for the checks after it.
pub(crate) fn create_with(ctx: &mut CheckContext<'_>, draft: WorkspaceDraft) -> Result<CheckOutcome> {
    let workspace = ctx.client.create_workspace(&draft)?;
    ctx.state.workspace_id = Some(workspace.id);

    Ok(CheckOutcome::pass(format!("Workspace created: {}", workspace.name))
        .with_detail(format!("Workspace ID: {}", workspace.id))
        .with_detail(format!("Status: {}", shown(workspace.status))))
}

pub fn list(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let listing = ctx.client.list_workspaces()?;

    let outcome = CheckOutcome::pass(format!("Found {} workspaces", listing.total()));
    Ok(listing
        .workspaces
        .into_iter()
        .take(ctx.run.list_preview)
        .fold(outcome, |outcome, ws| {
            outcome.with_detail(format!(
                "- {} (ID: {}, Status: {})",
                ws.name,
                ws.id,
                shown(ws.status)
            ))
        }))
}

pub fn get(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    let workspace = ctx.client.workspace(id)?;

    Ok(CheckOutcome::pass(format!("Workspace retrieved: {}", workspace.name))
        .with_detail(format!("Description: {}", shown(workspace.description)))
        .with_detail(format!("Sessions: {}", shown(workspace.session_count))))
}

pub fn update(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    let draft = WorkspaceDraft {
        name: "Updated Workspace Name".to_string(),
        description: "Updated description".to_string(),
        session_settings: None,
    };
    let workspace = ctx.client.update_workspace(id, &draft)?;

    Ok(CheckOutcome::pass(format!("Workspace updated: {}", workspace.name)))
}

pub fn archive(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    let reply = ctx.client.archive_workspace(id)?;
    Ok(status_outcome(reply, "Workspace archived", "Archive workspace failed"))
}

pub fn unarchive(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    let reply = ctx.client.unarchive_workspace(id)?;
    Ok(status_outcome(reply, "Workspace unarchived", "Unarchive workspace failed"))
}

pub fn delete(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    ctx.client.delete_workspace(id)?;
    Ok(CheckOutcome::pass("Workspace deleted (soft delete)"))
}

pub fn restore(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let id = ctx.workspace_id()?;
    let reply = ctx.client.restore_workspace(id)?;
    Ok(restored_outcome(reply, "Workspace restored from trash", "Restore workspace failed"))
}

/// Pass with the reported status, or fail when the reply has none.
pub(crate) fn status_outcome(reply: StatusReply, success: &str, failure: &str) -> CheckOutcome {
    match reply.status {
        Some(status) => CheckOutcome::pass(format!("{}: {}", success, status)),
        None => CheckOutcome::fail(failure).with_detail("Response has no status"),
    }
}

/// Pass when the restored resource comes back with its id.
pub(crate) fn restored_outcome(reply: StatusReply, success: &str, failure: &str) -> CheckOutcome {
    match reply.id {
        Some(id) => CheckOutcome::pass(success).with_detail(format!("ID: {}", id)),
        None => CheckOutcome::fail(failure).with_detail("Response has no id"),
    }
}
