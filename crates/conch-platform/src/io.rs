//! Input and output capability traits.

use conch_types::error::Result;

/// Text attributes the console applies to prompts, echo, and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAttr {
    Bold,
    Underline,
    White,
    Red,
}

/// Source of raw keystrokes.
///
/// Returns exactly one unbuffered byte per [`next_byte`](Self::next_byte)
/// call, with local echo disabled. Extended keys arrive as two-byte
/// sequences per [`crate::keys`].
///
/// The line editor brackets each line read with
/// [`begin_read`](Self::begin_read) / [`end_read`](Self::end_read) so a
/// backend can scope its terminal raw-mode toggle to the read and restore
/// the terminal afterward, on every exit path.
pub trait KeySource {
    /// Called before the first byte of a line is requested.
    fn begin_read(&mut self) -> Result<()> {
        Ok(())
    }

    /// Block until one raw input byte is available and return it.
    fn next_byte(&mut self) -> Result<u8>;

    /// Called after the line read finishes, normally or not.
    fn end_read(&mut self) {}
}

/// Sink for styled text: prompt rendering, input echo, error reporting.
pub trait StyledText {
    /// Emit raw text.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Enable a text attribute. Attributes accumulate until reset.
    fn set_attr(&mut self, attr: TextAttr) -> Result<()>;

    /// Reset all text attributes to the terminal default.
    fn reset_attr(&mut self) -> Result<()>;
}
