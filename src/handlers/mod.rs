//! Command registration, dispatch and help.
//!
//! A line goes through [`App::process`]: tokenize, resolve the command in
//! the [`Registry`], parse flags against the command's table, then render
//! help or call the [`Handler`].

pub mod core;
pub mod help;

pub use self::core::{
    App, Command, DEFAULT_APP_NAME, DEFAULT_COMMAND, Handler, HandlerResult, Registry,
};
pub use self::help::HelpStyle;
