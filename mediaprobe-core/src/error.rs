// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the mediaprobe Core Library
//
// This module defines the error taxonomy used throughout mediaprobe-core.
// Per-item probe failures are normally carried as structured `ProbeOutcome`
// values and never raised; the variants below cover the failures that are
// surfaced directly to callers.
//
// KEY COMPONENTS:
// - CoreError: The error enum for all core operations
// - CoreResult: Result alias used across the crate
// - Helpers for building command errors from spawned tools

use crate::config::{
    STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_NOT_FOUND, STATUS_PRECONDITION_FAILED,
    STATUS_UNAVAILABLE,
};

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by mediaprobe-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A backend could not produce metadata for a media reference.
    #[error("{media}: {message} (status {status})")]
    BackendProbe {
        media: String,
        message: String,
        status: u16,
    },

    /// Effective width or height could not be resolved from the metadata.
    #[error("Cannot determine orientation of {0}: width/height unavailable")]
    MissingDimensions(String),

    /// The filesystem size lookup failed for a path.
    #[error("Cannot access {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backend name is not a simple identifier.
    #[error("Invalid backend name '{0}': expected letters, digits or underscores")]
    InvalidBackendName(String),

    /// Backend name is well formed but nothing is registered under it.
    #[error("Unknown backend '{0}'")]
    UnknownBackend(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// HTTP-like status describing this error, matching the status codes
    /// used by probe outcomes.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::BackendProbe { status, .. } => *status,
            CoreError::MissingDimensions(_) => STATUS_PRECONDITION_FAILED,
            CoreError::FilesystemAccess { .. } => STATUS_NOT_FOUND,
            CoreError::InvalidBackendName(_) | CoreError::UnknownBackend(_) => STATUS_BAD_REQUEST,
            CoreError::CommandStart(_, e) if e.kind() == io::ErrorKind::NotFound => {
                STATUS_UNAVAILABLE
            }
            _ => STATUS_INTERNAL_ERROR,
        }
    }
}

/// Result type for mediaprobe-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a tool that could not be spawned.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a `CommandFailed` error for a tool that exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CoreError::MissingDimensions("a.mp4".into()).status_code(),
            412
        );
        assert_eq!(CoreError::InvalidBackendName("a-b".into()).status_code(), 400);
        assert_eq!(CoreError::UnknownBackend("nope".into()).status_code(), 400);
        assert_eq!(
            CoreError::BackendProbe {
                media: "x".into(),
                message: "boom".into(),
                status: 415,
            }
            .status_code(),
            415
        );
        let missing_tool = command_start_error(
            "ffprobe",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(missing_tool.status_code(), 503);
    }

    #[test]
    fn test_filesystem_access_message_names_path() {
        let err = CoreError::FilesystemAccess {
            path: PathBuf::from("/nope/a.mp4"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        assert!(err.to_string().contains("/nope/a.mp4"));
    }
}
