//! Raw keystroke acquisition.

use std::collections::VecDeque;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use conch_platform::KeySource;
use conch_platform::keys::{EXT_PREFIX_E0, KEY_BACKSPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_TAB, KEY_UP};
use conch_types::error::Result;

/// Holds the terminal in raw mode (no echo, no canonical buffering) until
/// dropped. Dropping always restores the previous mode, so an early return
/// out of a read cannot leave the terminal raw.
#[derive(Debug)]
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Switch the terminal into raw mode.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {e}");
        }
    }
}

/// [`KeySource`] over the process terminal.
///
/// Blocks on crossterm key events and translates them into the raw byte
/// protocol. Arrow keys become two-byte sequences, drained from a pending
/// queue on the following call.
#[derive(Debug, Default)]
pub struct TermKeys {
    pending: VecDeque<u8>,
    raw: Option<RawModeGuard>,
}

impl TermKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TermKeys {
    fn begin_read(&mut self) -> Result<()> {
        self.raw = Some(RawModeGuard::new()?);
        Ok(())
    }

    fn next_byte(&mut self) -> Result<u8> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(byte);
        }
        loop {
            if let Event::Key(ev) = event::read()? {
                if ev.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some((first, second)) = translate_key(&ev) {
                    if let Some(b) = second {
                        self.pending.push_back(b);
                    }
                    return Ok(first);
                }
            }
        }
    }

    fn end_read(&mut self) {
        self.raw = None;
    }
}

/// Map a native key event to protocol bytes.
///
/// Returns the first byte and, for extended keys, the scan code that must
/// follow it. Events the console has no use for (modified chords, non-ASCII
/// input, keys outside the editing set) map to `None`.
fn translate_key(ev: &KeyEvent) -> Option<(u8, Option<u8>)> {
    if ev.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match ev.code {
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => Some((c as u8, None)),
        KeyCode::Enter => Some((KEY_ENTER, None)),
        KeyCode::Backspace => Some((KEY_BACKSPACE, None)),
        KeyCode::Tab => Some((KEY_TAB, None)),
        KeyCode::Esc => Some((KEY_ESCAPE, None)),
        KeyCode::Up => Some((EXT_PREFIX_E0, Some(KEY_UP))),
        KeyCode::Down => Some((EXT_PREFIX_E0, Some(KEY_DOWN))),
        _ => None,
    }
}
