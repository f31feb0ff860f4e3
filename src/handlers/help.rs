//! Help text rendering.
//!
//! Pure formatting: parameter listings are column-aligned on the widest
//! flag label, string flags carry a `<value>` hint.

use super::core::Command;
use std::sync::Arc;

/// Layout of parameter listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpStyle {
    /// Spaces before each flag.
    pub indent: usize,
    /// Minimum spaces between the flag column and its description.
    pub column_gap: usize,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            column_gap: 4,
        }
    }
}

fn flag_label(flag: &str, takes_value: bool) -> String {
    if takes_value {
        format!("{flag} <value>")
    } else {
        flag.to_string()
    }
}

/// One aligned line per parameter, sorted by flag.
pub fn render_params(command: &Command, style: &HelpStyle) -> String {
    let labels: Vec<(String, &str)> = command
        .params()
        .iter()
        .map(|(flag, spec)| (flag_label(flag, spec.kind.takes_value()), spec.help.as_str()))
        .collect();
    let width = labels
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, help) in labels {
        if help.is_empty() {
            out.push_str(&format!("{:indent$}{label}\n", "", indent = style.indent));
        } else {
            out.push_str(&format!(
                "{:indent$}{label:<width$}{:gap$}{help}\n",
                "",
                "",
                indent = style.indent,
                gap = style.column_gap,
            ));
        }
    }
    out
}

/// The command's help message followed by its parameter listing.
pub fn render_command(command: &Command, style: &HelpStyle) -> String {
    let mut out = String::new();
    if !command.help().is_empty() {
        out.push_str(command.help());
        out.push('\n');
    }
    out.push_str(&render_params(command, style));
    out
}

/// Application help.
///
/// With one registered command, the usage line omits the command name
/// since it is never typed. Otherwise every command gets a usage line and
/// its own help, in name order.
pub fn render_app(
    app_name: &str,
    app_help: &str,
    commands: &[Arc<Command>],
    style: &HelpStyle,
) -> String {
    let mut out = String::new();
    if !app_help.is_empty() {
        out.push_str(app_help);
        out.push_str("\n\n");
    }

    if let [command] = commands {
        out.push_str(&format!("usage: {app_name} [params]\n"));
        out.push_str(&render_command(command, style));
        return out;
    }

    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("usage: {app_name} {} [params]\n", command.name()));
        out.push_str(&render_command(command, style));
    }
    out
}
