//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use super::defaults::{MAX_COLUMN_GAP, MAX_HELP_INDENT};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("app.name is required")]
    MissingAppName,
    #[error("app.name must not contain whitespace, got '{0}'")]
    InvalidAppName(String),
    #[error("help.column_gap must be at least 1")]
    ZeroColumnGap,
    #[error("help.column_gap must be at most 16, got {0}")]
    ColumnGapTooWide(usize),
    #[error("help.indent must be at most 16, got {0}")]
    IndentTooWide(usize),
    #[error("logging.filter is not a valid filter: {0}")]
    InvalidLogFilter(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Required fields
    let name = &config.app.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingAppName);
    } else if name.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidAppName(name.clone()));
    }

    // Help layout
    if config.help.column_gap == 0 {
        errors.push(ValidationError::ZeroColumnGap);
    } else if config.help.column_gap > MAX_COLUMN_GAP {
        errors.push(ValidationError::ColumnGapTooWide(config.help.column_gap));
    }
    if config.help.indent > MAX_HELP_INDENT {
        errors.push(ValidationError::IndentTooWide(config.help.indent));
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(ValidationError::InvalidLogFilter(e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
