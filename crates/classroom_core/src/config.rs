//! Configuration for a smoke-check run.

use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `[target] base_url`.
pub const ENV_BASE_URL: &str = "CLASSROOM_BASE_URL";
/// Environment variable overriding `[account] email`.
pub const ENV_EMAIL: &str = "CLASSROOM_EMAIL";
/// Environment variable overriding `[account] password`.
pub const ENV_PASSWORD: &str = "CLASSROOM_PASSWORD";

/// Comprehensive configuration for a run against the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Where the platform lives.
    #[serde(default)]
    pub target: TargetConfig,

    /// Test account settings.
    #[serde(default)]
    pub account: AccountConfig,

    /// Knobs for individual checks.
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from a file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| ProbeError::ConfigError(format!("failed to read config: {}", e)))?;
            Self::from_toml(&content)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a file that must exist.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ProbeError::ConfigNotFound(path.to_path_buf()));
        }
        Self::load(path)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ProbeError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ProbeError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a closure so tests don't touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.target.base_url = url;
        }
        if let Some(email) = lookup(ENV_EMAIL).filter(|v| !v.is_empty()) {
            self.account.email = Some(email);
        }
        if let Some(password) = lookup(ENV_PASSWORD).filter(|v| !v.is_empty()) {
            self.account.password = password;
        }
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        let url = self.target.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ProbeError::ConfigError(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.target.base_url
            )));
        }
        if self.target.timeout_secs == 0 {
            return Err(ProbeError::ConfigError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL prefix every endpoint path is appended to.
    pub fn api_base(&self) -> String {
        let base = self.target.base_url.trim_end_matches('/');
        let prefix = self.target.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }
}

/// Platform location and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    /// Scheme, host and port of the platform (default: http://localhost:6100).
    pub base_url: String,

    /// Path prefix of the versioned API (default: /api/v1).
    pub api_prefix: String,

    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:6100".to_string(),
            api_prefix: "/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TargetConfig {
    /// Returns the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Test account settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountConfig {
    /// Fixed email to register with. A fresh address is generated when unset.
    pub email: Option<String>,

    /// Password used for registration and login (default: testpassword123).
    pub password: String,

    /// Domain of generated addresses (default: example.com).
    pub email_domain: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email: None,
            password: "testpassword123".to_string(),
            email_domain: "example.com".to_string(),
        }
    }
}

impl AccountConfig {
    /// Email for a suite: the configured one, or `<prefix><8 hex>@<domain>`.
    pub fn email_for(&self, prefix: &str) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => generate_email(prefix, &self.email_domain),
        }
    }
}

/// Builds a throwaway address that will not collide with earlier runs.
pub fn generate_email(prefix: &str, domain: &str) -> String {
    let tag = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}@{}", prefix, &tag[..8], domain)
}

/// Knobs for individual checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Id assumed not to exist on the server (default: 99999).
    pub nonexistent_id: i64,

    /// Pause between starting and stopping a session in the integration flow (default: 1000).
    pub integration_pause_ms: u64,

    /// How many list entries to print in the per-resource suites (default: 5).
    pub list_preview: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            nonexistent_id: 99999,
            integration_pause_ms: 1000,
            list_preview: 5,
        }
    }
}

impl RunConfig {
    /// Returns the integration pause as a Duration.
    pub fn integration_pause(&self) -> Duration {
        Duration::from_millis(self.integration_pause_ms)
    }
}
