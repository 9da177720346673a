//! Rendering: scrollback pane on top, input line(s) at the bottom.
//!
//! The widgets only read kernel state: the scrollback pane asks the log
//! for a wrap-aware bottom-aligned row window sized to its area, and the
//! input pane draws the prompt, the text, and a block cursor at the
//! editor's byte offset.

use crate::app::App;
use gap_line::{LineInput, ScrollbackLog};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Continuation prompt for lines after the first.
const CONTINUATION_PROMPT: &str = ".... ";

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The input grows downward with multiline continuations, clamped so
    // the scrollback keeps at least one row.
    let input_rows = (app.input.text().split('\n').count() as u16)
        .clamp(1, area.height.saturating_sub(1).max(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(input_rows)])
        .split(area);

    frame.render_widget(&ScrollbackPane::new(&app.scrollback), chunks[0]);
    frame.render_widget(&InputPane::new(&app.input), chunks[1]);
}

/// The output pane: most recent lines, soft-wrapped, newest at the bottom.
pub struct ScrollbackPane<'a> {
    log: &'a ScrollbackLog,
}

impl<'a> ScrollbackPane<'a> {
    pub fn new(log: &'a ScrollbackLog) -> Self {
        Self { log }
    }
}

impl Widget for &ScrollbackPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.log.wrap_window(area.width as usize, area.height as usize);
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        Paragraph::new(lines).render(area, buf);
    }
}

/// The input pane: prompt, text, and block cursor.
pub struct InputPane<'a> {
    input: &'a LineInput,
}

impl<'a> InputPane<'a> {
    pub fn new(input: &'a LineInput) -> Self {
        Self { input }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let text = self.input.text();
        let cursor = self.input.cursor().min(text.len());
        let input_lines: Vec<&str> = text.split('\n').collect();

        // Locate the cursor's line and column within the split lines.
        let mut cursor_line = input_lines.len().saturating_sub(1);
        let mut cursor_col = 0;
        let mut pos = 0;
        for (i, line_text) in input_lines.iter().enumerate() {
            let line_end = pos + line_text.len();
            if cursor <= line_end {
                cursor_line = i;
                cursor_col = cursor - pos;
                break;
            }
            pos = line_end + 1; // the newline byte
        }

        let mut lines = Vec::with_capacity(input_lines.len());
        for (i, line_text) in input_lines.iter().enumerate() {
            let prompt = if i == 0 {
                self.input.prompt()
            } else {
                CONTINUATION_PROMPT
            };
            let mut spans = vec![Span::styled(
                prompt.to_string(),
                Style::default().fg(Color::Green),
            )];

            if i == cursor_line {
                let col = cursor_col.min(line_text.len());
                let (before, after) = line_text.split_at(col);
                if !before.is_empty() {
                    spans.push(Span::raw(before.to_string()));
                }

                // Block cursor over the character at the cursor cell, or a
                // space past the end of the line.
                let cursor_len = after.chars().next().map_or(0, char::len_utf8);
                let cursor_char = if after.is_empty() {
                    " "
                } else {
                    &after[..cursor_len]
                };
                spans.push(Span::styled(
                    cursor_char.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ));

                if after.len() > cursor_len {
                    spans.push(Span::raw(after[cursor_len..].to_string()));
                }
            } else {
                spans.push(Span::raw(line_text.to_string()));
            }

            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Widget for &InputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_lines()).render(area, buf);
    }
}
