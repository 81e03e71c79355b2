//! Built-in commands.
//!
//! Everything here works through the dispatch [`Context`] only: output goes
//! to the styled sink, reconfiguration goes through [`CommandEffect`].

use conch_types::error::{ConchError, Result};

use crate::registry::{Command, CommandEffect, CommandRegistry, Context};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(PromptCmd));
    reg.register(Box::new(HistSizeCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        for cmd in ctx.commands.iter() {
            ctx.out
                .write_text(&format!("{:<12} {}\n", cmd.name(), cmd.description()))?;
        }
        ctx.out
            .write_text(&format!("{:<12} Leave the console\n", crate::console::EXIT_COMMAND))?;
        Ok(CommandEffect::None)
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show submitted lines, most recent first"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        for (i, entry) in ctx.history.iter().enumerate() {
            ctx.out.write_text(&format!("{i:>3}  {entry}\n"))?;
        }
        Ok(CommandEffect::None)
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print the rest of the line"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        ctx.out.write_text(ctx.rest)?;
        ctx.out.write_text("\n")?;
        Ok(CommandEffect::None)
    }
}

// ---------------------------------------------------------------------------
// prompt
// ---------------------------------------------------------------------------

struct PromptCmd;
impl Command for PromptCmd {
    fn name(&self) -> &str {
        "prompt"
    }
    fn description(&self) -> &str {
        "Change the prompt text"
    }
    fn usage(&self) -> &str {
        "prompt <text>"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        let text = ctx.rest.trim();
        if text.is_empty() {
            return Err(ConchError::Argument(format!("usage: {}", self.usage())));
        }
        Ok(CommandEffect::SetPrompt(text.to_string()))
    }
}

// ---------------------------------------------------------------------------
// histsize
// ---------------------------------------------------------------------------

struct HistSizeCmd;
impl Command for HistSizeCmd {
    fn name(&self) -> &str {
        "histsize"
    }
    fn description(&self) -> &str {
        "Resize the history buffer"
    }
    fn usage(&self) -> &str {
        "histsize <n>"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        let capacity: usize = ctx.rest.trim().parse().map_err(|_| {
            ConchError::Argument(format!("usage: {}", self.usage()))
        })?;
        if capacity == 0 {
            return Err(ConchError::Argument(
                "history capacity must be positive".into(),
            ));
        }
        Ok(CommandEffect::SetHistoryCapacity(capacity))
    }
}
