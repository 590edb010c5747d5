//! Error types for classroom_core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for classroom_core operations.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a different status than the check expected.
    #[error("Expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Status the check expected
        expected: u16,
        /// Status the server returned
        actual: u16,
        /// Raw response body, kept for the failure report
        body: String,
    },

    /// Response body was not the JSON shape the check reads.
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// A check needs a value an earlier check should have produced.
    #[error("No {0} available")]
    MissingState(&'static str),

    /// Base URL or endpoint could not be turned into a request URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Configuration file was requested explicitly but does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// I/O error on the console or the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operator aborted an interactive prompt.
    #[error("test interrupted by user")]
    Interrupted,

    /// A required interactive value was left empty.
    #[error("{0} required")]
    InputRequired(&'static str),
}

impl ProbeError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Transport(e) if e.is_connect() => {
                Some("Is the platform running? Check --base-url or CLASSROOM_BASE_URL.")
            }
            Self::Transport(e) if e.is_timeout() => {
                Some("Raise [target] timeout_secs in the config file.")
            }
            Self::UnexpectedStatus { actual: 401, .. } => {
                Some("The access token is missing or expired. Log in again or pass --token.")
            }
            Self::MissingState(_) => Some("An earlier check failed; fix that one first."),
            Self::InputRequired("Access token") => {
                Some("Run 'classroom-check run auth' to obtain a token.")
            }
            Self::ConfigError(_) | Self::ConfigNotFound(_) => {
                Some("Run 'classroom-check config' to print a valid configuration.")
            }
            _ => None,
        }
    }

    /// Returns true when the operator asked to stop the run.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Convenience Result type for classroom_core operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
