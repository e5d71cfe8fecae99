//! Error types for cd-recent operations.
//!
//! This module defines [`CdRecentError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CdRecentError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CdRecentError::Other`) for unexpected errors
//! - User-facing variants carry a hint pointing at the flag that fixes them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cd-recent operations.
#[derive(Debug, Error)]
pub enum CdRecentError {
    /// Failed to parse the persisted configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A numeric flag was not a positive integer.
    #[error("{flag} must be a positive number but was {value}")]
    InvalidNumber { flag: &'static str, value: String },

    /// The history file given or configured does not exist.
    #[error("{path} history file does not exist")]
    HistoryFileNotFound { path: PathBuf },

    /// A history file path that cannot be stored in the JSON config.
    #[error("{path} is not a valid UTF-8 path")]
    NonUtf8Path { path: PathBuf },

    /// Retroactive tracking was requested without a history file.
    #[error("History file is not set")]
    HistoryFileUnset,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CdRecentError {
    /// Whether this error is a soft failure the CLI reports and halts on,
    /// rather than a fatal startup failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. }
                | Self::HistoryFileNotFound { .. }
                | Self::NonUtf8Path { .. }
                | Self::HistoryFileUnset
        )
    }

    /// Suggested next action for the user, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::HistoryFileUnset | Self::HistoryFileNotFound { .. } => {
                Some("try running `cd-recent -H <history-file-path>`")
            }
            _ => None,
        }
    }
}

/// Result type alias for cd-recent operations.
pub type Result<T> = std::result::Result<T, CdRecentError>;
