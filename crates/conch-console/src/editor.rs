//! The line editor state machine.
//!
//! Consumes raw keystroke bytes one at a time and maintains the in-progress
//! line plus two cursors layered on top of it: the navigation cursor (which
//! history entry is being recalled) and the prediction cursor (which
//! registered command the current prefix completes to). Every change to the
//! line erases and redraws the affected span immediately, so the visible
//! terminal state always matches the buffer.

use conch_platform::io::{KeySource, StyledText, TextAttr};
use conch_platform::keys::{
    KEY_BACKSPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_TAB, KEY_UP, is_ext_prefix, is_printable,
};
use conch_types::error::Result;
use conch_types::locale::{MessageKey, Messages};

use crate::history::HistoryBuffer;
use crate::registry::CommandRegistry;

/// Brackets one line read: `begin_read` on entry, `end_read` on drop, so the
/// backend's raw-mode toggle is undone on every exit path out of
/// [`LineEditor::read_line`], early returns included.
struct ReadScope<'a> {
    keys: &'a mut dyn KeySource,
}

impl<'a> ReadScope<'a> {
    fn new(keys: &'a mut dyn KeySource) -> Result<Self> {
        keys.begin_read()?;
        Ok(Self { keys })
    }

    fn next_byte(&mut self) -> Result<u8> {
        self.keys.next_byte()
    }
}

impl Drop for ReadScope<'_> {
    fn drop(&mut self) {
        self.keys.end_read();
    }
}

/// Write a red error line through the styled sink.
pub(crate) fn report_error(out: &mut dyn StyledText, message: &str) -> Result<()> {
    out.set_attr(TextAttr::Red)?;
    out.write_text(message)?;
    out.reset_attr()?;
    out.write_text("\n")?;
    Ok(())
}

/// Echo input text in the console's input style.
fn echo(out: &mut dyn StyledText, text: &str) -> Result<()> {
    out.set_attr(TextAttr::White)?;
    out.set_attr(TextAttr::Bold)?;
    out.write_text(text)
}

/// Erase `chars` visible characters with backspace-space-backspace.
fn erase_visible(out: &mut dyn StyledText, chars: usize) -> Result<()> {
    for _ in 0..chars {
        out.write_text("\u{8} \u{8}")?;
    }
    Ok(())
}

/// Prediction cursor for the current buffer: the first registered command
/// whose name starts with it. `None` for an empty buffer or no match.
fn predict_for(registry: &CommandRegistry, line: &str) -> Option<usize> {
    if line.is_empty() {
        return None;
    }
    registry.iter().position(|cmd| cmd.name().starts_with(line))
}

/// Reads one command line, keystroke at a time.
#[derive(Debug, Clone)]
pub struct LineEditor {
    max_len: usize,
}

impl LineEditor {
    /// Create an editor with the given maximum line length.
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "maximum line length must be positive");
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Read raw bytes until Enter finishes the line (or overflow discards
    /// it) and return the buffer contents.
    ///
    /// History is read for arrow-key recall but never mutated here; the
    /// registry is read for Tab prediction.
    pub fn read_line(
        &self,
        keys: &mut dyn KeySource,
        out: &mut dyn StyledText,
        history: &HistoryBuffer,
        registry: &CommandRegistry,
        messages: &Messages,
    ) -> Result<String> {
        let mut scope = ReadScope::new(keys)?;
        let mut line = String::new();
        let mut nav: Option<usize> = None;
        let mut predict: Option<usize> = None;

        loop {
            let byte = scope.next_byte()?;

            if is_ext_prefix(byte) {
                let code = scope.next_byte()?;
                if history.is_empty() {
                    continue;
                }
                let next = match (code, nav) {
                    (KEY_UP, None) => 0,
                    (KEY_UP, Some(i)) if i + 1 < history.len() => i + 1,
                    (KEY_DOWN, None) => 0,
                    (KEY_DOWN, Some(i)) if i > 0 => i - 1,
                    // Clamped at an edge, or an unrecognized scan code.
                    _ => continue,
                };
                nav = Some(next);
                erase_visible(out, line.len())?;
                line = history.get(next)?.to_string();
                echo(out, &line)?;
                predict = predict_for(registry, &line);
                continue;
            }

            match byte {
                KEY_ENTER => {
                    out.write_text("\n")?;
                    break;
                }
                KEY_TAB => {
                    if let Some(index) = predict {
                        let name = registry.get(index)?.name().to_string();
                        if name.len() > line.len() {
                            let suffix = &name[line.len()..];
                            echo(out, suffix)?;
                            line.push_str(suffix);
                        }
                    }
                }
                KEY_ESCAPE => {
                    erase_visible(out, line.len())?;
                    line.clear();
                    nav = None;
                    predict = None;
                }
                KEY_BACKSPACE => {
                    if !line.is_empty() {
                        out.write_text("\u{8} \u{8}")?;
                        line.pop();
                        predict = predict_for(registry, &line);
                    }
                }
                b if is_printable(b) => {
                    if line.len() >= self.max_len {
                        report_error(out, messages.get(MessageKey::CommandTooLong))?;
                        line.clear();
                        break;
                    }
                    let ch = b as char;
                    echo(out, ch.encode_utf8(&mut [0u8; 4]))?;
                    line.push(ch);
                    predict = predict_for(registry, &line);
                }
                // Unassigned control byte.
                _ => {}
            }
        }

        out.reset_attr()?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conch_platform::keys::EXT_PREFIX_NUL;
    use conch_platform::{CapturedText, ScriptedKeys};

    use crate::registry::{Command, CommandEffect, Context};

    struct NamedCmd(&'static str);
    impl Command for NamedCmd {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "test command"
        }
        fn usage(&self) -> &str {
            self.0
        }
        fn execute(&self, _ctx: &mut Context<'_>) -> Result<CommandEffect> {
            Ok(CommandEffect::None)
        }
    }

    fn registry_with(names: &[&'static str]) -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        for name in names {
            reg.register(Box::new(NamedCmd(name)));
        }
        reg
    }

    fn read(
        editor: &LineEditor,
        keys: &mut ScriptedKeys,
        history: &HistoryBuffer,
        registry: &CommandRegistry,
    ) -> (String, CapturedText) {
        let mut out = CapturedText::new();
        let messages = Messages::new();
        let line = editor
            .read_line(keys, &mut out, history, registry, &messages)
            .unwrap();
        (line, out)
    }

    #[test]
    fn typed_line_is_returned_on_enter() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("ls").press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "ls");
        assert_eq!(out.plain(), "ls\n");
    }

    #[test]
    fn enter_on_empty_buffer_yields_empty_string() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "");
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_noop() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.press(KEY_BACKSPACE).type_str("a").press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "a");
        assert_eq!(out.count_text("\u{8} \u{8}"), 0);
    }

    #[test]
    fn backspace_erases_last_character() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("ab").press(KEY_BACKSPACE).press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "a");
        assert_eq!(out.count_text("\u{8} \u{8}"), 1);
    }

    #[test]
    fn escape_clears_line_and_cursors() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("abc").press(KEY_ESCAPE).press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "");
        // One erase per visible character.
        assert_eq!(out.count_text("\u{8} \u{8}"), 3);
    }

    #[test]
    fn typing_resumes_after_escape() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("abc").press(KEY_ESCAPE).type_str("ok").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "ok");
    }

    #[test]
    fn tab_completes_predicted_command() {
        let editor = LineEditor::new(255);
        let registry = registry_with(&["help", "history"]);
        let mut keys = ScriptedKeys::new();
        keys.type_str("he").press(KEY_TAB).press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry);
        assert_eq!(line, "help");
        assert_eq!(out.count_text("lp"), 1);
    }

    #[test]
    fn tab_prefers_earliest_registered_match() {
        let editor = LineEditor::new(255);
        let registry = registry_with(&["history", "help"]);
        let mut keys = ScriptedKeys::new();
        keys.type_str("h").press(KEY_TAB).press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry);
        assert_eq!(line, "history");
    }

    #[test]
    fn tab_without_candidate_is_a_noop() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("xy").press(KEY_TAB).press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&["help"]));
        assert_eq!(line, "xy");
    }

    #[test]
    fn tab_on_exact_name_appends_nothing() {
        let editor = LineEditor::new(255);
        let registry = registry_with(&["help"]);
        let mut keys = ScriptedKeys::new();
        keys.type_str("help").press(KEY_TAB).press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry);
        assert_eq!(line, "help");
    }

    #[test]
    fn prediction_follows_backspace() {
        let editor = LineEditor::new(255);
        let registry = registry_with(&["help", "ping"]);
        let mut keys = ScriptedKeys::new();
        // "p" predicts ping; erase it, type "h", Tab must complete help.
        keys.type_str("p")
            .press(KEY_BACKSPACE)
            .type_str("h")
            .press(KEY_TAB)
            .press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry);
        assert_eq!(line, "help");
    }

    #[test]
    fn up_recalls_most_recent_then_older() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        history.push("two");
        let mut keys = ScriptedKeys::new();
        keys.press_up().press_up().press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "one");
    }

    #[test]
    fn up_clamps_at_oldest_entry() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        history.push("two");
        let mut keys = ScriptedKeys::new();
        keys.press_up().press_up().press_up().press_up().press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "one");
    }

    #[test]
    fn down_from_none_recalls_most_recent() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        history.push("two");
        let mut keys = ScriptedKeys::new();
        keys.press_down().press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "two");
    }

    #[test]
    fn down_walks_back_toward_newest_and_clamps_at_zero() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        history.push("two");
        let mut keys = ScriptedKeys::new();
        keys.press_up().press_up().press_down().press_down().press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "two");
    }

    #[test]
    fn recall_replaces_typed_text_and_redraws() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("status");
        let mut keys = ScriptedKeys::new();
        keys.type_str("xyz").press_up().press(KEY_ENTER);
        let (line, out) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "status");
        // The three typed characters were erased before the redraw.
        assert_eq!(out.count_text("\u{8} \u{8}"), 3);
        assert_eq!(out.count_text("status"), 1);
    }

    #[test]
    fn typing_extends_a_recalled_entry() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("ping");
        let mut keys = ScriptedKeys::new();
        keys.press_up().type_str("!").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "ping!");
    }

    #[test]
    fn arrows_are_ignored_when_history_is_empty() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.press_up().press_down().type_str("a").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "a");
    }

    #[test]
    fn unknown_scan_code_is_ignored() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        let mut keys = ScriptedKeys::new();
        keys.press(EXT_PREFIX_NUL).press(99).type_str("a").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "a");
    }

    #[test]
    fn nul_prefix_works_like_e0() {
        let editor = LineEditor::new(255);
        let mut history = HistoryBuffer::new(4);
        history.push("one");
        let mut keys = ScriptedKeys::new();
        keys.press(EXT_PREFIX_NUL).press(KEY_UP).press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &history, &registry_with(&[]));
        assert_eq!(line, "one");
    }

    #[test]
    fn overflow_discards_line_and_reports_error() {
        let editor = LineEditor::new(4);
        let mut keys = ScriptedKeys::new();
        keys.type_str("abcde");
        let mut out = CapturedText::new();
        let messages = Messages::new();
        let line = editor
            .read_line(
                &mut keys,
                &mut out,
                &HistoryBuffer::new(4),
                &registry_with(&[]),
                &messages,
            )
            .unwrap();
        assert_eq!(line, "");
        assert!(out.plain().contains("command too long"));
    }

    #[test]
    fn line_at_exact_maximum_still_submits() {
        let editor = LineEditor::new(4);
        let mut keys = ScriptedKeys::new();
        keys.type_str("abcd").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "abcd");
    }

    #[test]
    fn non_printable_bytes_are_ignored() {
        let editor = LineEditor::new(255);
        let mut keys = ScriptedKeys::new();
        keys.type_str("a").press(0x01).press(0x7F).type_str("b").press(KEY_ENTER);
        let (line, _) = read(&editor, &mut keys, &HistoryBuffer::new(4), &registry_with(&[]));
        assert_eq!(line, "ab");
    }
}
