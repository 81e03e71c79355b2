//! Platform capability abstractions for CONCH.
//!
//! The console core never talks to a terminal directly. It consumes two
//! capabilities: a [`KeySource`] that yields one raw input byte per call with
//! local echo disabled, and a [`StyledText`] sink for prompt rendering and
//! input echo. Backends implement both; `conch-term` provides the real
//! terminal backend, and [`scripted`] provides in-memory implementations for
//! tests and scripted automation.

pub mod io;
pub mod keys;
pub mod scripted;

pub use io::{KeySource, StyledText, TextAttr};
pub use scripted::{CapturedText, ScriptedKeys, TextEvent};
