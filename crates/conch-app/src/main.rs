//! CONCH desktop entry point.
//!
//! Interactive command console on the process terminal. Type `help` for the
//! built-in commands and `exit` to quit. Configuration is resolved from the
//! first CLI argument, the `CONCH_CONFIG` env var, or built-in defaults.

mod commands;

use std::path::PathBuf;

use anyhow::Result;

use conch_console::{Console, register_builtins};
use conch_term::{AnsiText, TermKeys};
use conch_types::config::ConsoleConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = resolve_config()?;
    log::info!(
        "starting conch (prompt {:?}, history {}, max line {})",
        config.prompt,
        config.history_size,
        config.max_line_len,
    );

    let mut console = Console::new(&config);
    register_builtins(console.registry_mut());
    commands::register_app_commands(console.registry_mut());

    let mut keys = TermKeys::new();
    let mut out = AnsiText::new();
    console.run(&mut keys, &mut out)?;

    log::info!("conch exited cleanly");
    Ok(())
}

/// Resolve configuration from the CLI argument, the `CONCH_CONFIG` env var,
/// or built-in defaults, in that order.
fn resolve_config() -> Result<ConsoleConfig> {
    let explicit = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("CONCH_CONFIG").map(PathBuf::from));
    match explicit {
        Some(path) => Ok(ConsoleConfig::load(&path)?),
        None => Ok(ConsoleConfig::default()),
    }
}
