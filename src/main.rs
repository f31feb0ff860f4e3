//! cmdroute - interactive command dispatch demo.
//!
//! Reads command lines from stdin and dispatches each to one of a few demo
//! commands. Usage: `cmdroute [config.toml]`.

use anyhow::Context;
use cmdroute::config::{self, Config};
use cmdroute::{App, Command, DispatchError, HandlerResult, ParamKind, ParsedParams};
use std::io::{self, BufRead};
use std::sync::{Arc, Weak};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => {
            Config::load(&path).with_context(|| format!("failed to load config {path}"))?
        }
        None => Config::default(),
    };

    cmdroute::telemetry::init(&config.logging)?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("refusing to start with {} configuration error(s)", errors.len());
    }

    let app = Arc::new(App::from_config(&config));
    register_demo_commands(&app);
    info!(app = %app.name(), commands = app.len(), "Starting cmdroute");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = app.process(&line) {
            eprintln!("{}", report(&e));
        }
    }

    info!(stats = ?app.command_stats(), "Input closed");
    Ok(())
}

/// User-facing line for a failed dispatch.
///
/// Handler failures already display with an `error:` prefix, so only their
/// source chain is printed after `ERROR:`.
fn report(e: &DispatchError) -> String {
    match e {
        DispatchError::Handler { source, .. } => format!("ERROR: {source:#}"),
        e => format!("ERROR: {e}"),
    }
}

fn register_demo_commands(app: &Arc<App>) {
    app.register(
        Command::new("echo")
            .with_help("Print text back")
            .with_flag("--help", ParamKind::Help, "Show this help")
            .with_flag("--text", ParamKind::String, "Text to print")
            .with_flag("--upper", ParamKind::Boolean, "Uppercase the text")
            .with_handler_fn(echo),
    );

    app.register(
        Command::new("sum")
            .with_help("Add two integers")
            .with_flag("--help", ParamKind::Help, "Show this help")
            .with_flag("--a", ParamKind::String, "First operand")
            .with_flag("--b", ParamKind::String, "Second operand")
            .with_handler_fn(sum),
    );

    let weak: Weak<App> = Arc::downgrade(app);
    app.register(
        Command::new("stats")
            .with_help("Show how often each command ran")
            .with_flag("--help", ParamKind::Help, "Show this help")
            .with_handler_fn(move |_| {
                if let Some(app) = weak.upgrade() {
                    for (name, count) in app.command_stats() {
                        println!("{name:<12}{count}");
                    }
                }
                Ok(())
            }),
    );

    app.register(
        Command::new("help")
            .with_help("List every command")
            .with_handler_fn({
                let weak = Arc::downgrade(app);
                move |_| {
                    if let Some(app) = weak.upgrade() {
                        print!("{}", app.help_text());
                    }
                    Ok(())
                }
            }),
    );
}

fn echo(params: &ParsedParams) -> HandlerResult {
    let text = params.value("--text").unwrap_or_default();
    if params.is_set("--upper") {
        println!("{}", text.to_uppercase());
    } else {
        println!("{text}");
    }
    Ok(())
}

fn sum(params: &ParsedParams) -> HandlerResult {
    let operand = |flag: &str| -> anyhow::Result<i64> {
        let raw = params
            .value(flag)
            .with_context(|| format!("{flag} is required"))?;
        raw.parse()
            .with_context(|| format!("{flag} is not an integer: {raw}"))
    };
    let total = operand("--a")?
        .checked_add(operand("--b")?)
        .context("sum overflows")?;
    println!("{total}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_failure_has_one_prefix() {
        let app = App::new("");
        app.register(Command::new("fail").with_handler_fn(|_| anyhow::bail!("disk full")));
        app.register(Command::new("other"));

        let err = app.process("fail").unwrap_err();
        assert_eq!(report(&err), "ERROR: disk full");
    }

    #[test]
    fn handler_context_chain_is_kept() {
        let app = Arc::new(App::new(""));
        register_demo_commands(&app);

        let err = app.process("sum --a 1 --b x").unwrap_err();
        assert_eq!(
            report(&err),
            "ERROR: --b is not an integer: x: invalid digit found in string"
        );
    }

    #[test]
    fn parse_failures_print_their_message() {
        let err = DispatchError::CommandNotFound("nope".into());
        assert_eq!(report(&err), "ERROR: the command nope doesn't exist");
    }
}
