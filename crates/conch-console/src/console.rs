//! The console read-eval loop.
//!
//! Drives prompt rendering, line reading, whitespace normalization, history
//! recording, tokenization of the command name, and dispatch to the
//! registry. Runs until the reserved `exit` command.

use conch_platform::io::{KeySource, StyledText, TextAttr};
use conch_types::config::ConsoleConfig;
use conch_types::error::Result;
use conch_types::locale::{MessageKey, Messages};

use crate::args::ArgMap;
use crate::editor::{LineEditor, report_error};
use crate::history::HistoryBuffer;
use crate::registry::{CommandEffect, CommandRegistry, Context};

/// Reserved command name that terminates the loop. Checked before the
/// registry scan, so a registered command of the same name never runs.
pub const EXIT_COMMAND: &str = "exit";

/// Collapse every run of two or more spaces into a single space.
///
/// Normalization only — leading and trailing single spaces are kept, and
/// other whitespace (tabs) is untouched. Idempotent.
pub fn normalize_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_space = false;
    for ch in line.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}

/// The interactive command console.
pub struct Console {
    prompt: String,
    editor: LineEditor,
    history: HistoryBuffer,
    registry: CommandRegistry,
    args: ArgMap,
    messages: Messages,
}

impl Console {
    /// Create a console from a configuration. No commands are registered.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            editor: LineEditor::new(config.max_line_len),
            history: HistoryBuffer::new(config.history_size),
            registry: CommandRegistry::new(),
            args: ArgMap::new(),
            messages: Messages::new(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Resize the history buffer (see [`HistoryBuffer::set_capacity`]).
    pub fn set_history_size(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    /// Register a command.
    pub fn register(&mut self, cmd: Box<dyn crate::registry::Command>) {
        self.registry.register(cmd);
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The argument map commands read from.
    pub fn args(&self) -> &ArgMap {
        &self.args
    }

    /// Population surface for an external argument parser.
    pub fn args_mut(&mut self) -> &mut ArgMap {
        &mut self.args
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Localization overrides.
    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    /// Run the read-eval loop until `exit` is submitted.
    ///
    /// Command failures and unknown names are reported and the loop
    /// continues; only I/O failures of the key source or output sink abort.
    pub fn run(&mut self, keys: &mut dyn KeySource, out: &mut dyn StyledText) -> Result<()> {
        loop {
            self.print_prompt(out)?;
            let line =
                self.editor
                    .read_line(keys, out, &self.history, &self.registry, &self.messages)?;
            if line.is_empty() {
                continue;
            }

            let line = normalize_spaces(&line);
            self.history.push(line.clone());

            let (name, rest) = match line.split_once(' ') {
                Some((name, rest)) => (name, rest),
                None => (line.as_str(), ""),
            };

            if name == EXIT_COMMAND {
                log::info!("exit requested");
                return Ok(());
            }

            self.dispatch(name, rest, out)?;
        }
    }

    fn print_prompt(&self, out: &mut dyn StyledText) -> Result<()> {
        out.write_text("\n")?;
        out.set_attr(TextAttr::Underline)?;
        out.write_text(&self.prompt)?;
        out.reset_attr()?;
        out.write_text("> ")?;
        Ok(())
    }

    /// Scan the registry in registration order and execute the first match.
    fn dispatch(&mut self, name: &str, rest: &str, out: &mut dyn StyledText) -> Result<()> {
        let mut found = false;
        let mut effect = CommandEffect::None;

        for cmd in self.registry.iter() {
            if cmd.name() != name {
                continue;
            }
            found = true;
            log::debug!("dispatching {name:?}");
            let mut ctx = Context {
                args: &self.args,
                rest,
                history: &self.history,
                commands: &self.registry,
                out: &mut *out,
            };
            match cmd.execute(&mut ctx) {
                Ok(e) => effect = e,
                Err(e) => {
                    log::warn!("command {name:?} failed: {e}");
                    report_error(out, &format!("error: {e}"))?;
                }
            }
            break;
        }

        match effect {
            CommandEffect::None => {}
            CommandEffect::SetPrompt(prompt) => self.prompt = prompt,
            CommandEffect::SetHistoryCapacity(n) => {
                if n > 0 {
                    self.history.set_capacity(n);
                } else {
                    log::warn!("ignoring request for zero history capacity");
                }
            }
        }

        if !found {
            log::warn!("unknown command: {name:?}");
            report_error(out, self.messages.get(MessageKey::UnknownCommand))?;
        }
        Ok(())
    }
}
