// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Car-Net client
//!
//! Every fatal condition of a session is an [`Error`]. Application-level
//! failures reported by the dashboard (`errorCode != "0"`) are not errors:
//! they travel inside the returned [`ActionResult`](crate::api::ActionResult).

use thiserror::Error;

use crate::browser::LoginStage;

/// Result type alias for Car-Net operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Car-Net client
#[derive(Error, Debug)]
pub enum Error {
    /// Login input incomplete, raised before any browser interaction
    #[error("missing required property \"{field}\" in credentials")]
    MissingCredentialField { field: &'static str },

    /// A login step failed; no session is produced
    #[error("session acquisition failed at {stage}: {source}")]
    AcquisitionFailed {
        stage: LoginStage,
        #[source]
        source: Box<Error>,
    },

    /// Session credentials did not pass validation
    #[error("invalid session credentials: {reason}")]
    InvalidCredentials { reason: &'static str },

    /// Browser automation capability failed
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request header could not be encoded
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures reported by a browser automation backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// Waiting for an event exceeded the backend's own timeout
    #[error("timed out during {operation}")]
    Timeout { operation: String },

    /// Selector did not match or could not be interacted with
    #[error("selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Navigation did not complete
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// Script evaluation failed
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    /// Browser or page was closed underneath the session
    #[error("browser has been closed")]
    Closed,

    /// Anything else the backend reports
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap a failure as an acquisition failure at `stage`
    pub fn acquisition(stage: LoginStage, source: impl Into<Error>) -> Self {
        Error::AcquisitionFailed {
            stage,
            source: Box::new(source.into()),
        }
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials(reason: &'static str) -> Self {
        Error::InvalidCredentials { reason }
    }

    /// Login stage an acquisition failed at
    pub fn stage(&self) -> Option<LoginStage> {
        match self {
            Error::AcquisitionFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Check if this error came from the HTTP transport
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Json(_) | Error::Url(_) | Error::InvalidHeader { .. }
        )
    }

    /// Every `Error` ends the operation that raised it. Dashboard-reported
    /// failures are values, not errors.
    pub fn is_fatal(&self) -> bool {
        true
    }

    /// Check if this error was raised before any browser interaction
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::MissingCredentialField { .. })
    }

    /// Validation reason, looking through acquisition failures
    pub fn invalid_reason(&self) -> Option<&'static str> {
        match self {
            Error::InvalidCredentials { reason } => Some(*reason),
            Error::AcquisitionFailed { source, .. } => source.invalid_reason(),
            _ => None,
        }
    }
}

impl BrowserError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>) -> Self {
        BrowserError::Timeout {
            operation: operation.into(),
        }
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, BrowserError::Timeout { .. })
    }
}
