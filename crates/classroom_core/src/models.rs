//! Request and response payloads of the classroom platform.
//!
//! Responses only require the fields the checks read; everything else the
//! server sends is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned identifier of a user, workspace or session.
pub type ResourceId = i64;

// ===== Requests =====

/// Body of register and login.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of verify-email.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyEmail {
    pub email: String,
    pub code: String,
}

/// Body of resend-code.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResendCode {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
}

/// Body of workspace create and update.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkspaceDraft {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_settings: Option<Value>,
}

/// Body of session create and update.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionDraft {
    pub name: String,
    pub description: String,
}

// ===== Responses =====

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub user_id: ResourceId,
    pub email: String,
    #[serde(default)]
    pub verification_code_sent: bool,
}

/// Returned by verify-email and login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
}

impl TokenResponse {
    /// First 20 characters of the token, for display.
    pub fn preview(&self) -> String {
        token_preview(&self.access_token)
    }
}

/// Shortens a bearer token to `<first 20 chars>...`.
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(20).collect();
    format!("{}...", head)
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: ResourceId,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// `first last`, with `N/A` for missing parts.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or("N/A"),
            self.last_name.as_deref().unwrap_or("N/A")
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Workspace {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub session_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WorkspaceList {
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl WorkspaceList {
    /// Server-side count, or the page length when the server sent none.
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.workspaces.len() as u64)
    }
}

/// A classroom session (a timed activity inside a workspace).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassSession {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionList {
    pub sessions: Vec<ClassSession>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SessionList {
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.sessions.len() as u64)
    }
}

/// Reply of the lifecycle actions (archive, start, restore, ...).
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct StatusReply {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
}
