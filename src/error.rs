//! Unified error handling for cmdroute.
//!
//! Every failure of [`App::process`](crate::App::process) is a
//! [`DispatchError`]. Variants carry the command and token involved so
//! callers can branch on kind instead of matching message text.

use cmdroute_proto::ParseError;
use thiserror::Error;

// ============================================================================
// Dispatch Errors
// ============================================================================

/// Errors that can occur while dispatching a command line.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Token 0 names no registered command (multi-command mode only).
    #[error("the command {0} doesn't exist")]
    CommandNotFound(String),

    #[error("the parameter {param} doesn't exist")]
    UnknownParameter { command: String, param: String },

    #[error("the string parameter \"{param}\" was not provided a value")]
    MissingValue { command: String, param: String },

    #[error("handler function for command \"{0}\" not specified")]
    HandlerNotSpecified(String),

    /// The handler ran and failed.
    #[error("error: {source}")]
    Handler {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    /// Help text could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DispatchError {
    /// Attach the resolved command name to a parse failure.
    pub fn from_parse(command: &str, err: ParseError) -> Self {
        match err {
            ParseError::UnknownParameter { param } => Self::UnknownParameter {
                command: command.to_string(),
                param,
            },
            ParseError::MissingValue { param } => Self::MissingValue {
                command: command.to_string(),
                param,
            },
        }
    }

    /// Get a static error code string for logging labels.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CommandNotFound(_) => "command_not_found",
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::MissingValue { .. } => "missing_value",
            Self::HandlerNotSpecified(_) => "handler_not_specified",
            Self::Handler { .. } => "handler_error",
            Self::Output(_) => "output_error",
        }
    }

    /// The command the failure belongs to, when one was resolved.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::UnknownParameter { command, .. }
            | Self::MissingValue { command, .. }
            | Self::Handler { command, .. }
            | Self::HandlerNotSpecified(command) => Some(command),
            Self::CommandNotFound(_) | Self::Output(_) => None,
        }
    }

    /// True for failures raised before any handler ran.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::CommandNotFound(_) | Self::UnknownParameter { .. } | Self::MissingValue { .. }
        )
    }
}

/// Result type for [`App::process`](crate::App::process).
pub type DispatchResult = Result<(), DispatchError>;
