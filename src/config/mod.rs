//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading (Config, AppConfig, HelpConfig, LoggingConfig)
//! - [`validation`]: Startup checks returning every problem found
//! - `defaults`: serde default functions

mod defaults;
mod types;
mod validation;

pub use types::{AppConfig, Config, ConfigError, HelpConfig, LoggingConfig};
pub use validation::{ValidationError, validate};
