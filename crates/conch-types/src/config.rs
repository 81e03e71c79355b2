//! Console configuration.
//!
//! Loaded from a TOML file or constructed from defaults. Every field has a
//! default so a partial file (or no file at all) is valid.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConchError, Result};

/// Default prompt text shown before `"> "`.
pub const DEFAULT_PROMPT: &str = "conch";

/// Default number of history entries retained.
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Default maximum length of an in-progress command line.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Console configuration surface: prompt text, history capacity, line limit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prompt text rendered (underlined) before `"> "`.
    pub prompt: String,
    /// History buffer capacity. Must be positive.
    pub history_size: usize,
    /// Maximum in-progress line length before the overflow error fires.
    pub max_line_len: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_size: DEFAULT_HISTORY_SIZE,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        if config.history_size == 0 {
            return Err(ConchError::Config(format!(
                "history_size must be positive in {}",
                path.display()
            )));
        }
        if config.max_line_len == 0 {
            return Err(ConchError::Config(format!(
                "max_line_len must be positive in {}",
                path.display()
            )));
        }
        log::info!("loaded console config from {}", path.display());
        Ok(config)
    }
}
