//! In-memory capability implementations.
//!
//! Useful for unit tests and scripted console sessions: [`ScriptedKeys`]
//! replays a prepared byte feed, [`CapturedText`] records everything the
//! console would have drawn.

use std::collections::VecDeque;

use conch_types::error::{ConchError, Result};

use crate::io::{KeySource, StyledText, TextAttr};
use crate::keys::{EXT_PREFIX_E0, KEY_DOWN, KEY_UP};

/// A [`KeySource`] that replays a prepared sequence of raw bytes.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    bytes: VecDeque<u8>,
}

impl ScriptedKeys {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the bytes of `text` as typed characters.
    pub fn type_str(&mut self, text: &str) -> &mut Self {
        self.bytes.extend(text.bytes());
        self
    }

    /// Append a single raw byte.
    pub fn press(&mut self, byte: u8) -> &mut Self {
        self.bytes.push_back(byte);
        self
    }

    /// Append the two-byte up-arrow sequence.
    pub fn press_up(&mut self) -> &mut Self {
        self.bytes.push_back(EXT_PREFIX_E0);
        self.bytes.push_back(KEY_UP);
        self
    }

    /// Append the two-byte down-arrow sequence.
    pub fn press_down(&mut self) -> &mut Self {
        self.bytes.push_back(EXT_PREFIX_E0);
        self.bytes.push_back(KEY_DOWN);
        self
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_byte(&mut self) -> Result<u8> {
        self.bytes
            .pop_front()
            .ok_or_else(|| ConchError::Input("scripted key source exhausted".into()))
    }
}

/// One recorded output event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEvent {
    Text(String),
    Attr(TextAttr),
    Reset,
}

/// A [`StyledText`] sink that records everything written to it.
#[derive(Debug, Default)]
pub struct CapturedText {
    events: Vec<TextEvent>,
}

impl CapturedText {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[TextEvent] {
        &self.events
    }

    /// The concatenated text content, attributes ignored.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for ev in &self.events {
            if let TextEvent::Text(t) = ev {
                out.push_str(t);
            }
        }
        out
    }

    /// How many times `text` was written (counts whole write events).
    pub fn count_text(&self, text: &str) -> usize {
        self.events
            .iter()
            .filter(|ev| matches!(ev, TextEvent::Text(t) if t == text))
            .count()
    }
}

impl StyledText for CapturedText {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.events.push(TextEvent::Text(text.to_string()));
        Ok(())
    }

    fn set_attr(&mut self, attr: TextAttr) -> Result<()> {
        self.events.push(TextEvent::Attr(attr));
        Ok(())
    }

    fn reset_attr(&mut self) -> Result<()> {
        self.events.push(TextEvent::Reset);
        Ok(())
    }
}
