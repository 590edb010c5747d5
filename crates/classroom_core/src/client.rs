//! Blocking HTTP client for the classroom platform.

use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::{ProbeError, Result};
use crate::models::*;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Raw answer of one request: status plus body text.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| ProbeError::Decode(e.to_string()))
    }

    /// Fail unless the reply carries `expected`.
    pub fn ensure(self, expected: StatusCode) -> Result<Self> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ProbeError::UnexpectedStatus {
                expected: expected.as_u16(),
                actual: self.status.as_u16(),
                body: self.body,
            })
        }
    }
}

/// Client bound to one API base, optionally carrying a bearer token.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    api_base: String,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(&config.api_base(), config.target.timeout())
    }

    /// Build a client for an explicit API base such as `http://host:6100/api/v1`.
    pub fn with_timeout(api_base: &str, timeout: Duration) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/').to_string();
        reqwest::Url::parse(&api_base).map_err(|e| ProbeError::InvalidUrl {
            url: api_base.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            api_base,
            client,
            token: None,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attach a bearer token to all further requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// A copy of this client that sends the given token.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.set_token(token);
        client
    }

    /// A copy of this client that sends no Authorization header.
    pub fn without_token(&self) -> Self {
        let mut client = self.clone();
        client.token = None;
        client
    }

    /// Absolute URL of an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base, endpoint.path())
    }

    /// Issue a request without a body and return whatever the server answers.
    pub fn send(&self, endpoint: Endpoint) -> Result<ApiReply> {
        self.dispatch(endpoint, None)
    }

    /// Issue a request with a JSON body and return whatever the server answers.
    pub fn send_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<ApiReply> {
        let value = serde_json::to_value(body).map_err(|e| ProbeError::Decode(e.to_string()))?;
        self.dispatch(endpoint, Some(value))
    }

    fn dispatch(&self, endpoint: Endpoint, body: Option<Value>) -> Result<ApiReply> {
        let url = self.url(endpoint);
        let method = endpoint.method();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().map_err(|e| {
            warn!(%method, %url, error = %e, "request failed");
            e
        })?;
        let status = response.status();
        let body = response.text()?;

        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request complete"
        );

        Ok(ApiReply { status, body })
    }

    /// Call an endpoint and require its documented success status.
    fn expect_success(&self, endpoint: Endpoint) -> Result<ApiReply> {
        self.send(endpoint)?.ensure(endpoint.success_status())
    }

    fn expect_success_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<ApiReply> {
        self.send_json(endpoint, body)?
            .ensure(endpoint.success_status())
    }

    // ===== Auth =====

    pub fn register(&self, credentials: &Credentials) -> Result<RegisterResponse> {
        self.expect_success_json(Endpoint::Register, credentials)?
            .json()
    }

    pub fn verify_email(&self, request: &VerifyEmail) -> Result<TokenResponse> {
        self.expect_success_json(Endpoint::VerifyEmail, request)?
            .json()
    }

    pub fn login(&self, credentials: &Credentials) -> Result<TokenResponse> {
        self.expect_success_json(Endpoint::Login, credentials)?
            .json()
    }

    pub fn resend_code(&self, request: &ResendCode) -> Result<()> {
        self.expect_success_json(Endpoint::ResendCode, request)?;
        Ok(())
    }

    // ===== Users =====

    pub fn profile(&self) -> Result<UserProfile> {
        self.expect_success(Endpoint::GetProfile)?.json()
    }

    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.expect_success_json(Endpoint::UpdateProfile, update)?
            .json()
    }

    // ===== Workspaces =====

    pub fn create_workspace(&self, draft: &WorkspaceDraft) -> Result<Workspace> {
        self.expect_success_json(Endpoint::CreateWorkspace, draft)?
            .json()
    }

    pub fn list_workspaces(&self) -> Result<WorkspaceList> {
        self.expect_success(Endpoint::ListWorkspaces)?.json()
    }

    pub fn workspace(&self, id: ResourceId) -> Result<Workspace> {
        self.expect_success(Endpoint::GetWorkspace(id))?.json()
    }

    pub fn update_workspace(&self, id: ResourceId, draft: &WorkspaceDraft) -> Result<Workspace> {
        self.expect_success_json(Endpoint::UpdateWorkspace(id), draft)?
            .json()
    }

    /// Soft delete; the workspace stays restorable.
    pub fn delete_workspace(&self, id: ResourceId) -> Result<()> {
        self.expect_success(Endpoint::DeleteWorkspace(id))?;
        Ok(())
    }

    pub fn archive_workspace(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::ArchiveWorkspace(id))?.json()
    }

    pub fn unarchive_workspace(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::UnarchiveWorkspace(id))?
            .json()
    }

    pub fn restore_workspace(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::RestoreWorkspace(id))?.json()
    }

    // ===== Sessions =====

    pub fn create_session(&self, workspace: ResourceId, draft: &SessionDraft) -> Result<ClassSession> {
        self.expect_success_json(Endpoint::CreateSession(workspace), draft)?
            .json()
    }

    pub fn list_sessions(&self, workspace: ResourceId) -> Result<SessionList> {
        self.expect_success(Endpoint::ListSessions(workspace))?
            .json()
    }

    pub fn session(&self, id: ResourceId) -> Result<ClassSession> {
        self.expect_success(Endpoint::GetSession(id))?.json()
    }

    pub fn update_session(&self, id: ResourceId, draft: &SessionDraft) -> Result<ClassSession> {
        self.expect_success_json(Endpoint::UpdateSession(id), draft)?
            .json()
    }

    /// Soft delete; the session stays restorable.
    pub fn delete_session(&self, id: ResourceId) -> Result<()> {
        self.expect_success(Endpoint::DeleteSession(id))?;
        Ok(())
    }

    pub fn start_session(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::StartSession(id))?.json()
    }

    pub fn stop_session(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::StopSession(id))?.json()
    }

    pub fn restore_session(&self, id: ResourceId) -> Result<StatusReply> {
        self.expect_success(Endpoint::RestoreSession(id))?.json()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_deref().map(token_preview))
            .finish()
    }
}
