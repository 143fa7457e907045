//! Structured error handling and exit codes.

use serde::Serialize;

use crate::content::ContentError;
use crate::tui::TuiError;

/// Exit codes for the `conscious-choice` binary.
///
/// - 0: Success
/// - 1: General error (unexpected failure, bad arguments, inert URL)
/// - 2: Content unavailable (page rendered in its skeleton state, or
///   `check` found authoring issues)
/// - 130: Interrupted by user (Ctrl+C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the command completed normally.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// Content unavailable: content could not be loaded or is malformed.
    ContentUnavailable = 2,
    /// Interrupted: the command was interrupted by the user (Ctrl+C).
    Interrupted = 130,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "CC000",
            Self::GeneralError => "CC001",
            Self::ContentUnavailable => "CC002",
            Self::Interrupted => "CC130",
        }
    }

    /// Classify an error returned by [`run_app`](crate::run_app).
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        if matches!(err.downcast_ref::<TuiError>(), Some(TuiError::Interrupted)) {
            Self::Interrupted
        } else if err.downcast_ref::<ContentError>().is_some() {
            Self::ContentUnavailable
        } else {
            Self::GeneralError
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "CC001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message, including its causes
    pub message: String,
    /// Content file that failed to load, if that was the cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
    /// Whether the operation was interrupted
    pub interrupted: bool,
}

impl StructuredError {
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
            content_path: err
                .downcast_ref::<ContentError>()
                .map(|e| e.path().to_string()),
            interrupted: exit_code == ExitCode::Interrupted,
        }
    }
}
