//! Localized message catalog.
//!
//! The console never hardcodes user-facing error strings; it looks them up
//! here by key. The catalog ships English defaults and individual entries can
//! be replaced for localization.

use std::collections::HashMap;

/// Keys for the user-facing messages the console emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// The in-progress line hit the configured maximum length.
    CommandTooLong,
    /// No registered command matched the typed name.
    UnknownCommand,
}

/// Key → human-readable string catalog.
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<MessageKey, String>,
}

impl Messages {
    /// Create a catalog with the English defaults.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(MessageKey::CommandTooLong, "command too long".to_string());
        entries.insert(MessageKey::UnknownCommand, "unknown command".to_string());
        Self { entries }
    }

    /// Look up a message by key.
    pub fn get(&self, key: MessageKey) -> &str {
        // Every key is seeded in `new()` and `set()` never removes entries.
        self.entries.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Replace the text for a key (localization override).
    pub fn set(&mut self, key: MessageKey, text: impl Into<String>) {
        self.entries.insert(key, text.into());
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}
