//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use crate::handlers::DEFAULT_APP_NAME;

// =============================================================================
// App Defaults
// =============================================================================

pub fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

// =============================================================================
// Help Layout Defaults
// =============================================================================

/// Widest indent accepted for help listings.
pub const MAX_HELP_INDENT: usize = 16;

/// Widest gap accepted between flag and description columns.
pub const MAX_COLUMN_GAP: usize = 16;

pub fn default_help_indent() -> usize {
    2
}

pub fn default_column_gap() -> usize {
    4
}

// =============================================================================
// Logging Defaults
// =============================================================================

pub fn default_log_filter() -> String {
    "info".to_string()
}
