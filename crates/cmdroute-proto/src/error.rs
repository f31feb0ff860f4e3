//! Error types for the command line grammar.
//!
//! Parsing is a single left-to-right pass, so every failure names the one
//! token that stopped it.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors produced while binding tokens to a parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is not a flag declared by the command.
    #[error("the parameter {param} doesn't exist")]
    UnknownParameter {
        /// The offending token, as typed.
        param: String,
    },

    /// A string-valued flag was the last token on the line.
    #[error("the string parameter \"{param}\" was not provided a value")]
    MissingValue {
        /// The flag that expected a value.
        param: String,
    },
}

impl ParseError {
    /// The token or flag this error is about.
    pub fn param(&self) -> &str {
        match self {
            Self::UnknownParameter { param } | Self::MissingValue { param } => param,
        }
    }

    /// Get a static error code string for logging and metrics labels.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::MissingValue { .. } => "missing_value",
        }
    }
}
