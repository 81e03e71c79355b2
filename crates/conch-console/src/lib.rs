//! Console core for CONCH.
//!
//! A registry-based interactive command console. Commands implement the
//! [`Command`] trait and are registered by name. The [`Console`] loop reads
//! a line through the [`LineEditor`] (raw keystrokes, history recall, prefix
//! completion), normalizes it, records it into the [`HistoryBuffer`], and
//! dispatches the leading token to the [`CommandRegistry`].

pub mod args;
pub mod commands;
pub mod console;
pub mod editor;
pub mod history;
pub mod registry;

/// Externally populated argument map with typed accessors.
pub use args::ArgMap;
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// The read-eval loop and its reserved `exit` token.
pub use console::{Console, EXIT_COMMAND, normalize_spaces};
/// Keystroke-at-a-time line reader.
pub use editor::LineEditor;
/// Bounded most-recent-first history of submitted lines.
pub use history::HistoryBuffer;
/// A single executable command and the registry that dispatches it.
pub use registry::{Command, CommandEffect, CommandRegistry, Context};
