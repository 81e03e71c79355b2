//! Commands that only make sense in the desktop binary.

use conch_console::{Command, CommandEffect, CommandRegistry, Context};
use conch_types::error::Result;

/// Register app-level commands into a registry.
pub fn register_app_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(VersionCmd));
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn description(&self) -> &str {
        "Print the conch version"
    }
    fn usage(&self) -> &str {
        "version"
    }
    fn execute(&self, ctx: &mut Context<'_>) -> Result<CommandEffect> {
        ctx.out
            .write_text(concat!("conch ", env!("CARGO_PKG_VERSION"), "\n"))?;
        Ok(CommandEffect::None)
    }
}
