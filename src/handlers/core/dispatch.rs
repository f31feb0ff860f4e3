//! Command line dispatch.
//!
//! [`App`] owns a [`Registry`] and turns raw lines into handler calls:
//! tokenize, resolve the command, parse its flags, then either render help
//! or invoke the handler. Each call is independent; nothing but usage
//! counters survives it.

use super::command::Command;
use super::registry::Registry;
use crate::config::Config;
use crate::error::{DispatchError, DispatchResult};
use crate::handlers::help::{self, HelpStyle};
use crate::telemetry::{CommandTimer, spans};
use cmdroute_proto::{parse_params, tokenize};
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, trace};

/// Default application name used in usage lines.
pub const DEFAULT_APP_NAME: &str = "cmdroute";

/// A command-line application: registered commands plus app-level help.
pub struct App {
    name: String,
    help: String,
    style: HelpStyle,
    registry: RwLock<Registry>,
}

/// Outcome of resolving the first tokens of a line.
struct Resolved<'t> {
    command: Arc<Command>,
    params: &'t [&'t str],
    /// The registry held a single command, so no name was read.
    sole: bool,
}

impl App {
    /// Create an application with the given app-level help text.
    pub fn new(help: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            help: help.into(),
            style: HelpStyle::default(),
            registry: RwLock::new(Registry::new()),
        }
    }

    /// Create an application named, described and styled by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app.help.clone())
            .with_name(config.app.name.clone())
            .with_style(config.help.style())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the registry wholesale.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = RwLock::new(registry);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a command, replacing any command of the same name.
    pub fn register(&self, command: Command) -> Option<Arc<Command>> {
        self.registry.write().register(command)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<Command>> {
        self.registry.read().lookup(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    /// Usage counts of commands dispatched at least once.
    pub fn command_stats(&self) -> Vec<(String, u64)> {
        self.registry.read().command_stats()
    }

    /// Application help: the sole command's help, or every command's.
    pub fn help_text(&self) -> String {
        let commands = self.registry.read().commands();
        help::render_app(&self.name, &self.help, &commands, &self.style)
    }

    /// Help for one registered command.
    pub fn command_help(&self, name: &str) -> Option<String> {
        self.lookup(name)
            .map(|command| help::render_command(&command, &self.style))
    }

    /// Dispatch `raw`, writing any help text to stdout.
    ///
    /// Stdout is locked per write only, never across the handler call.
    pub fn process(&self, raw: &str) -> DispatchResult {
        self.process_to(raw, &mut io::stdout())
    }

    /// Dispatch `raw`, writing any help text to `out`.
    pub fn process_to<W: Write + ?Sized>(&self, raw: &str, out: &mut W) -> DispatchResult {
        let result = self.dispatch(raw, out);
        if let Err(ref e) = result {
            debug!(
                command = e.command().unwrap_or(""),
                code = e.error_code(),
                error = %e,
                "Command error"
            );
        }
        result
    }

    fn dispatch<W: Write + ?Sized>(&self, raw: &str, out: &mut W) -> DispatchResult {
        let tokens = tokenize(raw);
        trace!(line = %tokens.join(" "), "Dispatching line");

        let Resolved {
            command,
            params,
            sole,
        } = self.resolve(&tokens)?;

        let span = spans::command(command.name());
        let _enter = span.enter();
        let _timer = CommandTimer::new(command.name());
        self.registry.read().record_use(command.name());

        let parsed = parse_params(params, command.params())
            .map_err(|e| DispatchError::from_parse(command.name(), e))?;

        if parsed.has_help() {
            let text = if sole {
                self.help_text()
            } else {
                help::render_command(&command, &self.style)
            };
            out.write_all(text.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        let handler = command
            .handler()
            .ok_or_else(|| DispatchError::HandlerNotSpecified(command.name().to_string()))?;

        debug!(params = parsed.len(), "Invoking handler");
        handler
            .handle(&parsed)
            .map_err(|source| DispatchError::Handler {
                command: command.name().to_string(),
                source,
            })
    }

    /// Pick the target command. The registry lock is released on return,
    /// so handlers may register commands.
    fn resolve<'t>(&self, tokens: &'t [&'t str]) -> Result<Resolved<'t>, DispatchError> {
        let registry = self.registry.read();

        if let Some(command) = registry.sole() {
            return Ok(Resolved {
                command,
                params: tokens,
                sole: true,
            });
        }

        let (name, params) = match tokens.split_first() {
            Some((name, params)) => (*name, params),
            None => ("", tokens),
        };

        match registry.lookup(name) {
            Some(command) => Ok(Resolved {
                command,
                params,
                sole: false,
            }),
            None => Err(DispatchError::CommandNotFound(name.to_string())),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("style", &self.style)
            .field("registry", &*self.registry.read())
            .finish()
    }
}
