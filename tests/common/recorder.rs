//! Recording handler for integration tests.
//!
//! Every invocation is stored with the command name and a copy of the
//! parsed parameters, so tests can assert on exactly what a handler saw.

#![allow(dead_code)]

use cmdroute::{App, Command, ParamKind, ParsedParams};
use std::sync::{Arc, Mutex};

/// Shared log of handler invocations.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<(String, ParsedParams)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler to `command` that records into this log.
    pub fn attach(&self, command: Command) -> Command {
        let calls = Arc::clone(&self.calls);
        let name = command.name().to_string();
        command.with_handler_fn(move |params| {
            calls
                .lock()
                .expect("recorder lock poisoned")
                .push((name.clone(), params.clone()));
            Ok(())
        })
    }

    pub fn calls(&self) -> Vec<(String, ParsedParams)> {
        self.calls.lock().expect("recorder lock poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().expect("recorder lock poisoned").len()
    }

    /// Parameters of the only recorded call. Panics unless exactly one.
    pub fn only(&self) -> (String, ParsedParams) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one handler call");
        calls.into_iter().next().expect("length checked above")
    }
}

/// A command with `--help`, string `--foo` and boolean `--bar`.
pub fn test_command(name: &str) -> Command {
    Command::new(name)
        .with_help(format!("{name}help"))
        .with_flag("--help", ParamKind::Help, "Helphelp")
        .with_flag("--foo", ParamKind::String, "Helpfoo")
        .with_flag("--bar", ParamKind::Boolean, "Helpbar")
}

/// Application with recorded `main` and `test` commands.
pub fn test_app() -> (App, Recorder) {
    let recorder = Recorder::new();
    let app = App::new("Welcome to cmdApp testing");
    app.register(recorder.attach(test_command(cmdroute::DEFAULT_COMMAND)));
    app.register(recorder.attach(test_command("test")));
    (app, recorder)
}
