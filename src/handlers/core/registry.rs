//! Command registry.
//!
//! The `Registry` maps command names to descriptors and keeps per-command
//! usage counters for [`Registry::command_stats`].

use super::command::Command;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Registry of commands, keyed by name.
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<String, Arc<Command>>,
    /// Dispatch counters, one per registered name
    command_counts: HashMap<String, Arc<AtomicU64>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `command` under its name, replacing any earlier registration.
    ///
    /// Returns the replaced descriptor. The usage counter for the name is
    /// kept across replacement.
    pub fn register(&mut self, command: Command) -> Option<Arc<Command>> {
        let name = command.name().to_string();
        self.command_counts
            .entry(name.clone())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)));

        let replaced = self.commands.insert(name, Arc::new(command));
        if let Some(ref old) = replaced {
            debug!(command = %old.name(), "Command registration replaced");
        }
        replaced
    }

    /// Look up a command by exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The only command, when exactly one is registered.
    pub fn sole(&self) -> Option<Arc<Command>> {
        if self.commands.len() == 1 {
            self.commands.values().next().cloned()
        } else {
            None
        }
    }

    /// All commands, sorted by name.
    pub fn commands(&self) -> Vec<Arc<Command>> {
        let mut commands: Vec<_> = self.commands.values().cloned().collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }

    /// Count one dispatch of `name`.
    pub(crate) fn record_use(&self, name: &str) {
        if let Some(counter) = self.command_counts.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Usage counts of commands dispatched at least once.
    ///
    /// Sorted by count descending, then by name.
    pub fn command_stats(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (cmd.clone(), count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats
    }
}

impl FromIterator<Command> for Registry {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut registry = Self::new();
        for command in iter {
            registry.register(command);
        }
        registry
    }
}
