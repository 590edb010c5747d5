//! The platform's HTTP routes as a typed catalogue.
//!
//! Paths are relative to the API prefix (see [`crate::Config::api_base`]).

use crate::models::ResourceId;
use reqwest::{Method, StatusCode};
use std::fmt;

/// One route of the classroom platform, with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    VerifyEmail,
    Login,
    ResendCode,
    GetProfile,
    UpdateProfile,
    ListWorkspaces,
    CreateWorkspace,
    GetWorkspace(ResourceId),
    UpdateWorkspace(ResourceId),
    DeleteWorkspace(ResourceId),
    ArchiveWorkspace(ResourceId),
    UnarchiveWorkspace(ResourceId),
    RestoreWorkspace(ResourceId),
    ListSessions(ResourceId),
    CreateSession(ResourceId),
    GetSession(ResourceId),
    UpdateSession(ResourceId),
    DeleteSession(ResourceId),
    StartSession(ResourceId),
    StopSession(ResourceId),
    RestoreSession(ResourceId),
}

impl Endpoint {
    /// HTTP method of the route.
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            GetProfile | ListWorkspaces | GetWorkspace(_) | ListSessions(_) | GetSession(_) => {
                Method::GET
            }
            UpdateProfile | UpdateWorkspace(_) | UpdateSession(_) => Method::PUT,
            DeleteWorkspace(_) | DeleteSession(_) => Method::DELETE,
            _ => Method::POST,
        }
    }

    /// Path relative to the API prefix, with ids filled in.
    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            Register => "/auth/register".to_string(),
            VerifyEmail => "/auth/verify-email".to_string(),
            Login => "/auth/login".to_string(),
            ResendCode => "/auth/resend-code".to_string(),
            GetProfile | UpdateProfile => "/users/me".to_string(),
            ListWorkspaces | CreateWorkspace => "/workspaces".to_string(),
            GetWorkspace(id) | UpdateWorkspace(id) | DeleteWorkspace(id) => {
                format!("/workspaces/{}", id)
            }
            ArchiveWorkspace(id) => format!("/workspaces/{}/archive", id),
            UnarchiveWorkspace(id) => format!("/workspaces/{}/unarchive", id),
            RestoreWorkspace(id) => format!("/workspaces/{}/restore", id),
            ListSessions(id) | CreateSession(id) => format!("/workspaces/{}/sessions", id),
            GetSession(id) | UpdateSession(id) | DeleteSession(id) => format!("/sessions/{}", id),
            StartSession(id) => format!("/sessions/{}/start", id),
            StopSession(id) => format!("/sessions/{}/stop", id),
            RestoreSession(id) => format!("/sessions/{}/restore", id),
        }
    }

    /// Status the platform answers with when the call succeeds.
    pub fn success_status(&self) -> StatusCode {
        use Endpoint::*;
        match self {
            Register | CreateWorkspace | CreateSession(_) => StatusCode::CREATED,
            DeleteWorkspace(_) | DeleteSession(_) => StatusCode::NO_CONTENT,
            _ => StatusCode::OK,
        }
    }

    /// Whether the route needs a bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Endpoint::Register | Endpoint::VerifyEmail | Endpoint::Login | Endpoint::ResendCode
        )
    }

    /// Every route, with `{id}` placeholders standing in for path ids.
    pub fn catalog() -> Vec<CatalogEntry> {
        use Endpoint::*;
        const ID: ResourceId = 0;
        let routes = [
            (Register, "returns user_id, email"),
            (VerifyEmail, "returns access_token"),
            (Login, "returns access_token"),
            (ResendCode, ""),
            (GetProfile, ""),
            (UpdateProfile, ""),
            (ListWorkspaces, "returns workspaces, total"),
            (CreateWorkspace, ""),
            (GetWorkspace(ID), ""),
            (UpdateWorkspace(ID), ""),
            (DeleteWorkspace(ID), "soft delete"),
            (ArchiveWorkspace(ID), ""),
            (UnarchiveWorkspace(ID), ""),
            (RestoreWorkspace(ID), "restore from trash"),
            (ListSessions(ID), "returns sessions, total"),
            (CreateSession(ID), ""),
            (GetSession(ID), ""),
            (UpdateSession(ID), ""),
            (DeleteSession(ID), "soft delete"),
            (StartSession(ID), ""),
            (StopSession(ID), ""),
            (RestoreSession(ID), "restore from trash"),
        ];

        routes
            .into_iter()
            .map(|(endpoint, notes)| CatalogEntry {
                method: endpoint.method(),
                path: endpoint.path().replace("/0", "/{id}"),
                success: endpoint.success_status(),
                auth: endpoint.requires_auth(),
                notes,
            })
            .collect()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// A row of the endpoint table shown by `classroom-check endpoints`.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub method: Method,
    pub path: String,
    pub success: StatusCode,
    pub auth: bool,
    pub notes: &'static str,
}
