// ============================================================================
// mediaprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the mediaprobe-core error types, plus the mapping from errors to
// process exit codes.

// ---- Internal crate imports ----
use crate::config::{
    EXIT_FAILURE, EXIT_FILESYSTEM, EXIT_MISSING_DIMENSIONS, EXIT_PROBE_FAILED, EXIT_USAGE,
};
use mediaprobe_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// This trait provides methods similar to anyhow's context methods
/// but converts to CoreError instead.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }
}

impl<T> CliErrorContext<T> for Option<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.ok_or_else(|| CoreError::OperationFailed(context.to_string()))
    }
}

// ============================================================================
// EXIT CODES
// ============================================================================

/// Maps an error to the process exit code reported by the binary.
#[must_use]
pub fn exit_code_for(err: &CoreError) -> i32 {
    match err {
        CoreError::InvalidBackendName(_) | CoreError::UnknownBackend(_) => EXIT_USAGE,
        CoreError::MissingDimensions(_) => EXIT_MISSING_DIMENSIONS,
        CoreError::BackendProbe { .. } => EXIT_PROBE_FAILED,
        CoreError::FilesystemAccess { .. } => EXIT_FILESYSTEM,
        _ => EXIT_FAILURE,
    }
}

/// True when the core logger has already written this error to stderr.
///
/// Per-item probe failures are logged by the accessor as they happen, so the
/// binary does not print them a second time.
#[must_use]
pub fn already_reported(err: &CoreError) -> bool {
    matches!(err, CoreError::BackendProbe { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXIT_FALSE, EXIT_SUCCESS};
    use std::io;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&CoreError::InvalidBackendName("a b".into())), 2);
        assert_eq!(exit_code_for(&CoreError::UnknownBackend("nope".into())), 2);
        assert_eq!(exit_code_for(&CoreError::MissingDimensions("a.mp4".into())), 3);
        assert_eq!(
            exit_code_for(&CoreError::BackendProbe {
                media: "a.mp4".into(),
                message: "boom".into(),
                status: 500,
            }),
            4
        );
        assert_eq!(
            exit_code_for(&CoreError::FilesystemAccess {
                path: "a.mp4".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            }),
            5
        );
        assert_eq!(exit_code_for(&CoreError::OperationFailed("x".into())), 6);
    }

    #[test]
    fn test_errors_never_look_like_predicate_results() {
        let errors = [
            CoreError::OperationFailed("Failed to write output: IO error: disk full".into()),
            CoreError::Io(io::Error::other("broken pipe")),
            CoreError::JsonParse("eof".into()),
            CoreError::MissingDimensions("a.mp4".into()),
            CoreError::UnknownBackend("nope".into()),
        ];
        for err in &errors {
            let code = exit_code_for(err);
            assert_ne!(code, EXIT_SUCCESS, "{err}");
            assert_ne!(code, EXIT_FALSE, "{err}");
        }
    }

    #[test]
    fn test_only_probe_failures_are_already_reported() {
        assert!(already_reported(&CoreError::BackendProbe {
            media: "a.mp4".into(),
            message: "File not found: a.mp4".into(),
            status: 404,
        }));
        assert!(!already_reported(&CoreError::MissingDimensions("a.mp4".into())));
        assert!(!already_reported(&CoreError::OperationFailed("x".into())));
    }

    #[test]
    fn test_cli_context_wraps_message() {
        let result: Result<(), io::Error> = Err(io::Error::other("pipe closed"));
        let err = result.cli_context("Failed to write output").unwrap_err();
        assert_eq!(err.to_string(), "Failed to write output: IO error: pipe closed");

        let none: Option<u8> = None;
        let err = none.cli_context(format!("no item for {}", "a.mp4")).unwrap_err();
        assert_eq!(err.to_string(), "no item for a.mp4");
    }
}
