//! Error handling for energy ingestion and the override API.
//!
//! Provides error types with enough context to tell a missing CSV apart
//! from a rejected payload at the HTTP boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnergyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed energy CSV at {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Invalid override payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl EnergyError {
    /// Create a malformed-input error for the given file
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Whether the caller sent something we refuse (as opposed to a server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPayload { .. })
    }
}

pub type Result<T> = std::result::Result<T, EnergyError>;
