//! Command trait, dispatch context, and the ordered command registry.

use conch_platform::StyledText;
use conch_types::error::{ConchError, Result};

use crate::args::ArgMap;
use crate::history::HistoryBuffer;

/// Reconfiguration a command requests of the console loop.
///
/// Commands never hold a mutable borrow of the console; they return a signal
/// and the loop applies it after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandEffect {
    /// No reconfiguration.
    #[default]
    None,
    /// Replace the prompt text.
    SetPrompt(String),
    /// Resize the history buffer (must be positive; zero is ignored).
    SetHistoryCapacity(usize),
}

/// Per-dispatch view of the console handed to a command's `execute`.
pub struct Context<'a> {
    /// Externally populated argument map (typed reads).
    pub args: &'a ArgMap,
    /// Remainder of the submitted line after the command name, unparsed.
    pub rest: &'a str,
    /// Submitted-line history, most recent first.
    pub history: &'a HistoryBuffer,
    /// The registry the command was dispatched from.
    pub commands: &'a CommandRegistry,
    /// Styled output sink.
    pub out: &'a mut dyn StyledText,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Matched exactly, case-sensitive.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "histsize <n>").
    fn usage(&self) -> &str;

    /// Execute with the given dispatch context.
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect>;
}

/// Registry of available commands.
///
/// Registration order is preserved and significant: name lookup returns the
/// first match, and the editor's prediction cursor indexes into this order.
/// Duplicate names are not rejected; the earliest registration wins.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command, appending it to the scan order.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    /// First registered command with exactly this name.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| &**cmd)
    }

    /// Command at a registration index.
    pub fn get(&self, index: usize) -> Result<&dyn Command> {
        self.commands
            .get(index)
            .map(|cmd| &**cmd)
            .ok_or_else(|| ConchError::Registry(format!("command index {index} out of range")))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|cmd| &**cmd)
    }
}
