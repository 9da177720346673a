//! gap-line: gap-buffer line editing and scrollback for TUI applications
//!
//! This crate is the input/editing and scrollback-display kernel of a
//! terminal UI. It covers two subsystems:
//!
//! - A line-editing engine: a [`GapBuffer`] text store driven by a
//!   key-dispatching [`LineInput`] state machine with bounded [`History`]
//!   navigation.
//! - A bounded [`ScrollbackLog`]: an append-only line store that computes
//!   wrap-aware, bottom-aligned viewport windows on demand.
//!
//! # Design Philosophy
//!
//! - **Host-agnostic**: the library doesn't know about terminals or
//!   rendering. The host decodes raw bytes into [`Key`] events, feeds them
//!   to [`LineInput::handle_key`], and reacts to the returned [`Action`].
//! - **Byte-offset cursor**: all positions are byte offsets into the
//!   logical text; character and word operations never split a multi-byte
//!   UTF-8 sequence.
//! - **Caller owns the lifecycle**: every buffer, history, and log is an
//!   exclusively owned value. Nothing is shared, nothing blocks.
//!
//! # Example
//!
//! ```
//! use gap_line::{Action, Key, LineInput, ScrollbackLog};
//!
//! let mut input = LineInput::new("> ", 100);
//! let mut log = ScrollbackLog::new(1000);
//!
//! for ch in "hello".chars() {
//!     assert_eq!(input.handle_key(Key::Char(ch)), Action::Redraw);
//! }
//! assert_eq!(input.handle_key(Key::Enter), Action::Submit);
//!
//! let line = input.submit();
//! assert_eq!(line, "hello");
//! log.push(&line);
//!
//! assert!(input.text().is_empty());
//! assert_eq!(log.visible_lines(10).collect::<Vec<_>>(), ["hello"]);
//! ```

mod buffer;
mod history;
mod input;
mod scrollback;

pub use buffer::GapBuffer;
pub use history::History;
pub use input::LineInput;
pub use scrollback::ScrollbackLog;

/// A decoded key event.
///
/// This is the closed input vocabulary of the editing state machine. The
/// host's key decoder maps whatever its terminal layer produces onto these
/// variants; anything it cannot map becomes [`Key::Unknown`], which the
/// state machine ignores. The set is matched exhaustively so a new variant
/// cannot silently fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Move to start of line.
    CtrlA,
    /// Cancel the current input.
    CtrlC,
    /// End of input on an empty buffer, delete-forward otherwise.
    CtrlD,
    /// Move to end of line.
    CtrlE,
    /// Delete to end of line.
    CtrlK,
    /// Clear the screen.
    CtrlL,
    /// Delete to start of line.
    CtrlU,
    /// Delete the word before the cursor.
    CtrlW,
    /// Move one word left.
    CtrlLeft,
    /// Move one word right.
    CtrlRight,
    /// Insert a literal newline (multiline continuation).
    CtrlO,
    /// Insert a literal newline (multiline continuation).
    ShiftEnter,
    /// Insert a literal newline (multiline continuation).
    AltEnter,
    /// A key the host could not map; always a no-op.
    Unknown,
}

/// The externally visible effect of processing one key event.
///
/// Produced fresh by every [`LineInput::handle_key`] call; the host decides
/// what each one means (redraw, finalize a submission, tear down, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing happened.
    None,
    /// Buffer or cursor changed; no structural event.
    Redraw,
    /// The user finished the current line. The host should consume it via
    /// [`LineInput::submit`].
    Submit,
    /// The user aborted the current line.
    Cancel,
    /// End of input (Ctrl+D on an empty buffer).
    Eof,
    /// The user asked for a screen clear.
    ClearScreen,
}
