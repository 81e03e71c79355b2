//! Externally populated argument map with typed read accessors.
//!
//! The console loop never fills this map itself; it only splits the command
//! name off a submitted line. Whoever owns the console (or the command
//! itself, via the unparsed remainder) populates the map, and commands read
//! it through the typed accessors here.

use std::collections::HashMap;

use conch_types::error::{ConchError, Result};

/// String key → string value argument store. Keys are unique; setting an
/// existing key replaces its value.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    values: HashMap<String, String>,
}

impl ArgMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Populate an argument (the external parser surface).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove all arguments.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// String value for a key.
    pub fn string(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConchError::Argument(format!("missing argument: {key}")))
    }

    /// 16-bit integer value for a key. Fails on a missing key and on values
    /// that are not integers in i16 range.
    pub fn short(&self, key: &str) -> Result<i16> {
        let raw = self.string(key)?;
        raw.parse().map_err(|_| {
            ConchError::Argument(format!("argument {key} is not a 16-bit integer: {raw}"))
        })
    }

    /// 64-bit integer value for a key.
    pub fn long(&self, key: &str) -> Result<i64> {
        let raw = self.string(key)?;
        raw.parse().map_err(|_| {
            ConchError::Argument(format!("argument {key} is not a 64-bit integer: {raw}"))
        })
    }
}
