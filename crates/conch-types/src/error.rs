//! Error types for CONCH.

use std::io;

/// Errors produced by the CONCH console framework.
#[derive(Debug, thiserror::Error)]
pub enum ConchError {
    #[error("registry error: {0}")]
    Registry(String),

    #[error("history error: {0}")]
    History(String),

    #[error("argument error: {0}")]
    Argument(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConchError>;
