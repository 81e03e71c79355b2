//! Foundation types for CONCH.
//!
//! This crate contains the platform-agnostic types shared by all CONCH
//! crates: error types, the localized message catalog, and the console
//! configuration.

pub mod config;
pub mod error;
pub mod locale;
