//! ANSI styled text output.

use std::io::{Stdout, Write, stdout};

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::queue;

use conch_platform::{StyledText, TextAttr};
use conch_types::error::Result;

/// [`StyledText`] over stdout.
///
/// Flushes on every write so echoed keystrokes appear immediately, and maps
/// `\n` to `\r\n` because raw mode disables output post-processing.
#[derive(Debug)]
pub struct AnsiText {
    stdout: Stdout,
}

impl AnsiText {
    pub fn new() -> Self {
        Self { stdout: stdout() }
    }
}

impl Default for AnsiText {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledText for AnsiText {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.contains('\n') {
            queue!(self.stdout, Print(text.replace('\n', "\r\n")))?;
        } else {
            queue!(self.stdout, Print(text))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn set_attr(&mut self, attr: TextAttr) -> Result<()> {
        match attr {
            TextAttr::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
            TextAttr::Underline => queue!(self.stdout, SetAttribute(Attribute::Underlined))?,
            TextAttr::White => queue!(self.stdout, SetForegroundColor(Color::White))?,
            TextAttr::Red => queue!(self.stdout, SetForegroundColor(Color::Red))?,
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn reset_attr(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset)
        )?;
        self.stdout.flush()?;
        Ok(())
    }
}
