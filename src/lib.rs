//! cmdroute - command registration and dispatch.
//!
//! Register named commands, each with typed flags and a handler, then feed
//! raw command lines to [`App::process`]:
//!
//! ```rust
//! use cmdroute::{App, Command, DispatchError, ParamKind};
//!
//! let app = App::new("Deployment helper");
//! app.register(
//!     Command::new("deploy")
//!         .with_help("Deploy a build")
//!         .with_flag("--help", ParamKind::Help, "show this help")
//!         .with_flag("--target", ParamKind::String, "environment to deploy to")
//!         .with_flag("--force", ParamKind::Boolean, "skip safety checks")
//!         .with_handler_fn(|params| {
//!             assert_eq!(params.value("--target"), Some("prod"));
//!             Ok(())
//!         }),
//! );
//! app.register(Command::new("status"));
//!
//! app.process("deploy --target=prod --force").unwrap();
//! assert!(matches!(
//!     app.process("rollback"),
//!     Err(DispatchError::CommandNotFound(_))
//! ));
//! ```
//!
//! With exactly one registered command the name is omitted from the line
//! and every token is a parameter.

pub mod config;
pub mod error;
pub mod handlers;
pub mod telemetry;

pub use cmdroute_proto::{ParamKind, ParamSpec, ParamTable, ParseError, ParsedParam, ParsedParams};
pub use error::{DispatchError, DispatchResult};
pub use handlers::{
    App, Command, DEFAULT_APP_NAME, DEFAULT_COMMAND, Handler, HandlerResult, HelpStyle, Registry,
};
