//! Terminal backend for CONCH.
//!
//! Implements the `conch-platform` capabilities against a real terminal using
//! crossterm: [`TermKeys`] yields raw keystroke bytes with the terminal held
//! in raw mode for the duration of each line read, and [`AnsiText`] renders
//! styled text on stdout. Native key events are translated into the
//! two-byte extended-key protocol the line editor decodes.

mod input;
mod output;

pub use input::{RawModeGuard, TermKeys};
pub use output::AnsiText;
