//! Application state and action dispatch.
//!
//! `App` is the "surrounding runtime" the editing kernel was written for:
//! it feeds decoded keys to [`LineInput`], reacts to the returned
//! [`Action`], and owns the [`ScrollbackLog`] the output pane renders
//! from. Submitted lines are echoed back; a few `:commands` exercise the
//! rest of the surface.

use crate::keys::convert_key;
use crossterm::event::KeyEvent;
use gap_line::{Action, LineInput, ScrollbackLog};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Maximum history entries written back to disk.
const MAX_HISTORY_ON_DISK: usize = 1000;

/// Main application state.
pub struct App {
    /// Line editor (buffer, cursor, history).
    pub input: LineInput,
    /// Output log rendered above the input line.
    pub scrollback: ScrollbackLog,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether history is loaded from / saved to disk.
    persist_history: bool,
}

impl App {
    /// Create the application. With `persist_history` set, entries from a
    /// previous session are loaded immediately.
    pub fn new(prompt: &str, scrollback_capacity: usize, persist_history: bool) -> Self {
        let mut app = Self {
            input: LineInput::new(prompt, MAX_HISTORY_ON_DISK),
            scrollback: ScrollbackLog::new(scrollback_capacity),
            should_quit: false,
            persist_history,
        };
        app.scrollback
            .push("gapr - type :help for commands, Ctrl+D to exit");
        if persist_history {
            app.load_history();
        }
        app
    }

    /// The history file path, shared across sessions.
    fn history_file_path() -> Option<PathBuf> {
        home::home_dir().map(|d| d.join(".local/share/gapr_history"))
    }

    /// Load history from file. Missing or unreadable files are fine.
    fn load_history(&mut self) {
        let Some(path) = Self::history_file_path() else {
            return;
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return;
        };
        for line in contents.lines() {
            if !line.is_empty() {
                self.input.history_mut().add(line);
            }
        }
    }

    /// Save history to file. Failures warn and are otherwise ignored.
    pub fn save_history(&self) {
        if !self.persist_history {
            return;
        }
        let Some(path) = Self::history_file_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Warning: could not create history directory: {e}");
                return;
            }
        }
        match fs::File::create(&path) {
            Ok(mut file) => {
                let entries: Vec<&str> = self.input.history().entries().collect();
                let start = entries.len().saturating_sub(MAX_HISTORY_ON_DISK);
                for entry in &entries[start..] {
                    if let Err(e) = writeln!(file, "{entry}") {
                        eprintln!("Warning: could not write history entry: {e}");
                        break;
                    }
                }
            }
            Err(e) => {
                eprintln!("Warning: could not create history file: {e}");
            }
        }
    }

    /// Process one key event from the terminal.
    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.input.handle_key(convert_key(event)) {
            Action::Submit => self.submit_line(),
            Action::Cancel => self.input.cancel(),
            Action::Eof => self.should_quit = true,
            Action::ClearScreen => self.scrollback.clear(),
            // The event loop redraws every tick anyway.
            Action::Redraw | Action::None => {}
        }
    }

    /// Finalize the current input: echo it into the scrollback and run it.
    fn submit_line(&mut self) {
        if self.input.text().trim().is_empty() {
            return;
        }
        let line = self.input.submit();

        // Echo with prompts, continuation lines included.
        for (i, part) in line.split('\n').enumerate() {
            let prompt = if i == 0 { self.input.prompt() } else { ".... " };
            self.scrollback.push(&format!("{prompt}{part}"));
        }

        let trimmed = line.trim();
        if let Some(cmd) = trimmed.strip_prefix(':') {
            self.handle_command(cmd);
        } else {
            self.scrollback.push(trimmed);
        }
    }

    /// REPL commands (`:help`, `:clear`, `:quit`).
    fn handle_command(&mut self, cmd: &str) {
        match cmd.trim() {
            "help" | "h" => {
                self.scrollback.push(
                    "Commands:\n\
                     \x20 :help         Show this help\n\
                     \x20 :clear        Clear the scrollback\n\
                     \x20 :quit         Exit\n\
                     Keys: Ctrl+U/K/W kill, Ctrl+A/E home/end, \
                     Up/Down history, Shift+Enter newline",
                );
            }
            "clear" => self.scrollback.clear(),
            "quit" | "q" => self.should_quit = true,
            other => {
                self.scrollback.push(&format!("Unknown command: :{other}"));
            }
        }
    }
}
