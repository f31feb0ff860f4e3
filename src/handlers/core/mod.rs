//! Core command infrastructure.
//!
//! This module contains the fundamental types of the dispatch system:
//!
//! - [`Command`]: the registered descriptor (name, flags, help, handler)
//! - [`Handler`]: the extension point embedding applications implement
//! - [`Registry`]: name to descriptor mapping with usage counters
//! - [`App`]: owns a registry and dispatches raw command lines

pub mod command;
pub mod dispatch;
pub mod registry;

pub use command::{Command, DEFAULT_COMMAND, Handler, HandlerResult};
pub use dispatch::{App, DEFAULT_APP_NAME};
pub use registry::Registry;
