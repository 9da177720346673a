//! The key-driven editing state machine.
//!
//! [`LineInput`] owns one [`GapBuffer`] and one [`History`] and turns each
//! decoded [`Key`] into a buffer/history mutation plus an [`Action`] the
//! host reacts to. The host drives it strictly one key at a time and calls
//! [`LineInput::submit`] or [`LineInput::cancel`] before fresh editing
//! begins.

use crate::buffer::GapBuffer;
use crate::history::History;
use crate::{Action, Key};

/// Default history capacity when none is configured.
const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// A single-line (optionally multiline-continued) input editor.
#[derive(Debug, Clone)]
pub struct LineInput {
    buffer: GapBuffer,
    history: History,
    prompt: String,
}

impl LineInput {
    /// Create an editor with the given prompt and history capacity.
    pub fn new(prompt: impl Into<String>, history_capacity: usize) -> Self {
        Self {
            buffer: GapBuffer::new(),
            history: History::new(history_capacity),
            prompt: prompt.into(),
        }
    }

    /// Process one key event, mutating the buffer/history as needed, and
    /// report what happened.
    pub fn handle_key(&mut self, key: Key) -> Action {
        match key {
            Key::Char(ch) => {
                self.buffer.insert_char(ch);
                Action::Redraw
            }
            Key::Enter => Action::Submit,
            Key::Backspace => {
                self.buffer.delete_char_backward();
                Action::Redraw
            }
            Key::Delete => {
                self.buffer.delete_char_forward();
                Action::Redraw
            }
            Key::Left => {
                self.buffer.move_left_char();
                Action::Redraw
            }
            Key::Right => {
                self.buffer.move_right_char();
                Action::Redraw
            }
            Key::Home | Key::CtrlA => {
                self.buffer.move_to_start();
                Action::Redraw
            }
            Key::End | Key::CtrlE => {
                self.buffer.move_to_end();
                Action::Redraw
            }
            Key::CtrlLeft => {
                self.buffer.move_word_left();
                Action::Redraw
            }
            Key::CtrlRight => {
                self.buffer.move_word_right();
                Action::Redraw
            }
            Key::Up => {
                let live = self.buffer.text();
                if let Some(entry) = self.history.previous(&live) {
                    let entry = entry.to_string();
                    self.buffer.set_text(&entry);
                }
                Action::Redraw
            }
            Key::Down => {
                if let Some(text) = self.history.next() {
                    self.buffer.set_text(&text);
                }
                Action::Redraw
            }
            Key::CtrlU => {
                self.buffer.delete_to_start();
                Action::Redraw
            }
            Key::CtrlK => {
                self.buffer.delete_to_end();
                Action::Redraw
            }
            Key::CtrlW => {
                self.buffer.delete_word_backward();
                Action::Redraw
            }
            Key::CtrlC => Action::Cancel,
            Key::CtrlD => {
                if self.buffer.is_empty() {
                    Action::Eof
                } else {
                    self.buffer.delete_char_forward();
                    Action::Redraw
                }
            }
            Key::CtrlL => Action::ClearScreen,
            Key::CtrlO | Key::ShiftEnter | Key::AltEnter => {
                self.buffer.insert_char('\n');
                Action::Redraw
            }
            Key::Tab | Key::Escape | Key::Unknown => Action::None,
        }
    }

    /// Finalize the current line: record it in history (consecutive
    /// duplicates collapse), clear the buffer, leave history browsing, and
    /// hand the text to the caller.
    pub fn submit(&mut self) -> String {
        let text = self.buffer.text();
        self.history.add(&text);
        self.buffer.clear();
        self.history.reset();
        text
    }

    /// Abort the current line without recording anything.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.history.reset();
    }

    /// Allocated copy of the current text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Cursor position as a byte offset.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// The configured prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Read-only view of the text store, for rendering hosts.
    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    /// Read-only view of the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable history access, for hosts that persist entries across
    /// sessions.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

impl Default for LineInput {
    fn default() -> Self {
        Self::new("> ", DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut LineInput, text: &str) {
        for ch in text.chars() {
            assert_eq!(input.handle_key(Key::Char(ch)), Action::Redraw);
        }
    }

    #[test]
    fn typing_and_submit() {
        let mut input = LineInput::default();
        type_str(&mut input, "hello");
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 5);

        assert_eq!(input.handle_key(Key::Enter), Action::Submit);
        assert_eq!(input.submit(), "hello");
        assert!(input.text().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn edit_in_the_middle() {
        let mut input = LineInput::default();
        type_str(&mut input, "helo");
        input.handle_key(Key::Left);
        input.handle_key(Key::Left);
        input.handle_key(Key::Char('l'));
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_are_char_granular() {
        let mut input = LineInput::default();
        type_str(&mut input, "a\u{1F600}b");
        input.handle_key(Key::Backspace);
        assert_eq!(input.text(), "a\u{1F600}");
        input.handle_key(Key::Backspace);
        assert_eq!(input.text(), "a");

        type_str(&mut input, "\u{4F60}");
        input.handle_key(Key::Home);
        input.handle_key(Key::Delete);
        assert_eq!(input.text(), "\u{4F60}");
    }

    #[test]
    fn home_end_and_word_movement() {
        let mut input = LineInput::default();
        type_str(&mut input, "foo bar");
        input.handle_key(Key::CtrlA);
        assert_eq!(input.cursor(), 0);
        input.handle_key(Key::CtrlE);
        assert_eq!(input.cursor(), 7);
        input.handle_key(Key::CtrlLeft);
        assert_eq!(input.cursor(), 4);
        input.handle_key(Key::CtrlLeft);
        assert_eq!(input.cursor(), 0);
        input.handle_key(Key::CtrlRight);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn kill_keys() {
        let mut input = LineInput::default();
        type_str(&mut input, "foo bar baz");
        input.handle_key(Key::CtrlW);
        assert_eq!(input.text(), "foo bar ");
        input.handle_key(Key::CtrlU);
        assert_eq!(input.text(), "");

        type_str(&mut input, "keep cut");
        for _ in 0..3 {
            input.handle_key(Key::Left);
        }
        input.handle_key(Key::CtrlK);
        assert_eq!(input.text(), "keep ");
    }

    #[test]
    fn ctrl_d_is_eof_only_when_empty() {
        let mut input = LineInput::default();
        assert_eq!(input.handle_key(Key::CtrlD), Action::Eof);

        type_str(&mut input, "x");
        input.handle_key(Key::Home);
        assert_eq!(input.handle_key(Key::CtrlD), Action::Redraw);
        assert!(input.text().is_empty());
        assert_eq!(input.handle_key(Key::CtrlD), Action::Eof);
    }

    #[test]
    fn control_actions_do_not_mutate() {
        let mut input = LineInput::default();
        type_str(&mut input, "text");
        assert_eq!(input.handle_key(Key::CtrlC), Action::Cancel);
        assert_eq!(input.handle_key(Key::CtrlL), Action::ClearScreen);
        assert_eq!(input.text(), "text");

        input.cancel();
        assert!(input.text().is_empty());
    }

    #[test]
    fn newline_continuation_keys() {
        let mut input = LineInput::default();
        type_str(&mut input, "line1");
        input.handle_key(Key::ShiftEnter);
        type_str(&mut input, "line2");
        input.handle_key(Key::AltEnter);
        input.handle_key(Key::CtrlO);
        assert_eq!(input.text(), "line1\nline2\n\n");
        assert_eq!(input.buffer().line_count(), 4);
    }

    #[test]
    fn ignored_keys_are_none() {
        let mut input = LineInput::default();
        assert_eq!(input.handle_key(Key::Tab), Action::None);
        assert_eq!(input.handle_key(Key::Escape), Action::None);
        assert_eq!(input.handle_key(Key::Unknown), Action::None);
        assert!(input.text().is_empty());
    }

    #[test]
    fn history_navigation_round_trip() {
        let mut input = LineInput::default();
        type_str(&mut input, "first");
        input.submit();
        type_str(&mut input, "second");
        input.submit();

        input.handle_key(Key::Up);
        assert_eq!(input.text(), "second");
        input.handle_key(Key::Up);
        assert_eq!(input.text(), "first");
        input.handle_key(Key::Up); // already at oldest
        assert_eq!(input.text(), "first");

        input.handle_key(Key::Down);
        assert_eq!(input.text(), "second");
        input.handle_key(Key::Down); // past newest: back to live (empty) text
        assert_eq!(input.text(), "");
    }

    #[test]
    fn history_excursion_preserves_draft() {
        let mut input = LineInput::default();
        type_str(&mut input, "submitted");
        input.submit();

        type_str(&mut input, "draft");
        input.handle_key(Key::Up);
        assert_eq!(input.text(), "submitted");
        input.handle_key(Key::Down);
        assert_eq!(input.text(), "draft");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn submit_skips_consecutive_duplicates() {
        let mut input = LineInput::default();
        type_str(&mut input, "same");
        input.submit();
        type_str(&mut input, "same");
        input.submit();
        assert_eq!(input.history().len(), 1);
    }

    #[test]
    fn down_without_browsing_is_inert() {
        let mut input = LineInput::default();
        type_str(&mut input, "keep me");
        input.handle_key(Key::Down);
        assert_eq!(input.text(), "keep me");
    }
}
