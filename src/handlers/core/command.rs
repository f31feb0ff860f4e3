//! Command descriptors and the handler extension point.

use cmdroute_proto::{ParamKind, ParamSpec, ParamTable, ParsedParams};
use std::fmt;
use std::sync::Arc;

/// Name of the command an application registers when it has only one.
///
/// With exactly one registered command the dispatcher never reads a
/// command name from the line, so this name is never typed.
pub const DEFAULT_COMMAND: &str = "main";

/// Result type for command handlers.
pub type HandlerResult = anyhow::Result<()>;

/// Business logic behind a command.
///
/// Closures of the right shape implement this directly.
pub trait Handler: Send + Sync {
    /// Run with the parameters parsed from one command line.
    fn handle(&self, params: &ParsedParams) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&ParsedParams) -> HandlerResult + Send + Sync,
{
    fn handle(&self, params: &ParsedParams) -> HandlerResult {
        self(params)
    }
}

/// Registered definition of one command.
///
/// Built with the `with_*` methods, then handed to
/// [`Registry::register`](super::Registry::register), after which it is
/// shared read-only.
#[derive(Clone)]
pub struct Command {
    name: String,
    handler: Option<Arc<dyn Handler>>,
    params: ParamTable,
    help: String,
}

impl Command {
    /// Create a command with no parameters, help or handler.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: None,
            params: ParamTable::new(),
            help: String::new(),
        }
    }

    /// Create the [`DEFAULT_COMMAND`] of a single-command application.
    pub fn main() -> Self {
        Self::new(DEFAULT_COMMAND)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Declare a flag. Declaring the same flag again replaces it.
    pub fn with_param(mut self, flag: impl Into<String>, spec: ParamSpec) -> Self {
        self.params.insert(flag.into(), spec);
        self
    }

    /// Shorthand for [`with_param`](Self::with_param) with a kind and help string.
    pub fn with_flag(self, flag: impl Into<String>, kind: ParamKind, help: impl Into<String>) -> Self {
        self.with_param(flag, ParamSpec::new(kind, help))
    }

    pub fn with_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Closure form of [`with_handler`](Self::with_handler); lets the
    /// compiler infer the closure's argument type.
    pub fn with_handler_fn<F>(self, f: F) -> Self
    where
        F: Fn(&ParsedParams) -> HandlerResult + Send + Sync + 'static,
    {
        self.with_handler(f)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    pub fn handler(&self) -> Option<&Arc<dyn Handler>> {
        self.handler.as_ref()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("handler", &self.handler.as_ref().map(|_| "<fn>"))
            .field("params", &self.params)
            .field("help", &self.help)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdroute_proto::ParsedParam;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builder_collects_params() {
        let cmd = Command::new("test")
            .with_help("testhelp")
            .with_flag("--help", ParamKind::Help, "Helphelp")
            .with_param("--foo", ParamSpec::string("Helpfoo"))
            .with_flag("--bar", ParamKind::Boolean, "Helpbar");

        assert_eq!(cmd.name(), "test");
        assert_eq!(cmd.help(), "testhelp");
        assert_eq!(cmd.params().len(), 3);
        assert_eq!(cmd.params()["--foo"].kind, ParamKind::String);
        assert!(!cmd.has_handler());
    }

    #[test]
    fn redeclared_flag_keeps_last() {
        let cmd = Command::new("test")
            .with_flag("--foo", ParamKind::Boolean, "first")
            .with_flag("--foo", ParamKind::String, "second");
        assert_eq!(cmd.params().len(), 1);
        assert_eq!(cmd.params()["--foo"], ParamSpec::string("second"));
    }

    #[test]
    fn main_uses_default_name() {
        assert_eq!(Command::main().name(), DEFAULT_COMMAND);
    }

    #[test]
    fn closure_handler_is_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let cmd = Command::new("test").with_handler_fn(move |params| {
            assert_eq!(params.value("--foo"), Some("bar"));
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let mut params = ParsedParams::new();
        params.insert("--foo", ParsedParam::Value("bar".into()));
        cmd.handler().unwrap().handle(&params).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn trait_handler_is_accepted() {
        struct Fails;
        impl Handler for Fails {
            fn handle(&self, _params: &ParsedParams) -> HandlerResult {
                anyhow::bail!("nope")
            }
        }

        let cmd = Command::new("test").with_handler(Fails);
        let err = cmd.handler().unwrap().handle(&ParsedParams::new()).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn debug_hides_handler() {
        let cmd = Command::new("test").with_handler_fn(|_| Ok(()));
        let rendered = format!("{cmd:?}");
        assert!(rendered.contains("<fn>"));
        assert!(rendered.contains("\"test\""));
    }
}
