//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::defaults::{
    MAX_COLUMN_GAP, MAX_HELP_INDENT, default_app_name, default_column_gap, default_help_indent,
    default_log_filter,
};
use crate::handlers::HelpStyle;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Application identity and top-level help.
    #[serde(default)]
    pub app: AppConfig,
    /// Help listing layout.
    #[serde(default)]
    pub help: HelpConfig,
    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Application identity.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name shown in usage lines (default: "cmdroute").
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Text printed above the command listing.
    #[serde(default)]
    pub help: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            help: String::new(),
        }
    }
}

/// Help listing layout.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpConfig {
    /// Spaces before each flag (default: 2).
    #[serde(default = "default_help_indent")]
    pub indent: usize,
    /// Spaces between the flag column and descriptions (default: 4).
    #[serde(default = "default_column_gap")]
    pub column_gap: usize,
}

impl HelpConfig {
    /// Layout for help listings, clamped to the range [`validate`] accepts.
    ///
    /// [`validate`]: super::validate
    pub fn style(&self) -> HelpStyle {
        HelpStyle {
            indent: self.indent.min(MAX_HELP_INDENT),
            column_gap: self.column_gap.clamp(1, MAX_COLUMN_GAP),
        }
    }
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            indent: default_help_indent(),
            column_gap: default_column_gap(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}
