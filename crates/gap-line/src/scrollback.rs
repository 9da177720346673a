//! Bounded scrollback with wrap-aware viewport windowing.
//!
//! Lines are stored oldest-first in a ring buffer and never contain a
//! newline; pushing text splits it on `\n` first. The log itself knows
//! nothing about terminals — it only answers "which rows should a
//! `width x height` viewport show", bottom-aligned with the newest line at
//! the visual bottom.

use std::collections::VecDeque;

/// Append-only, capacity-bounded store of display lines.
#[derive(Debug, Clone)]
pub struct ScrollbackLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl ScrollbackLog {
    /// Create an empty log holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append `text`, splitting on `\n` so one call can add several lines.
    /// Each inserted segment evicts the single oldest line when the log is
    /// full.
    pub fn push(&mut self, text: &str) {
        for segment in text.split('\n') {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(segment.to_string());
        }
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The most recent `min(viewport_rows, len)` lines in chronological
    /// order. The host renders them top-to-bottom with any spare vertical
    /// space left blank *above* them.
    pub fn visible_lines(&self, viewport_rows: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(viewport_rows);
        self.lines.iter().skip(skip).map(String::as_str)
    }

    /// Bottom-aligned render plan for a `width x height` viewport with soft
    /// wrapping.
    ///
    /// Every returned entry is one display row, top-to-bottom: first the
    /// blank rows (`""`) that pad a not-yet-full viewport, then each
    /// included logical line split into `width`-character segments. A line
    /// wraps to `max(1, ceil(chars / width))` rows. Walking newest to
    /// oldest, a line that no longer fits whole contributes only its
    /// trailing rows — its leading rows are the part scrolled off the top.
    /// Degenerate viewports yield an empty plan.
    pub fn wrap_window(&self, width: usize, height: usize) -> Vec<&str> {
        if width < 2 || height < 1 {
            return Vec::new();
        }

        let mut remaining = height;
        // Newest first; reversed again on output.
        let mut selected: Vec<Vec<&str>> = Vec::new();
        for line in self.lines.iter().rev() {
            if remaining == 0 {
                break;
            }
            let mut segments = split_at_width(line, width);
            if segments.len() > remaining {
                segments.drain(..segments.len() - remaining);
            }
            remaining -= segments.len();
            selected.push(segments);
        }

        let mut rows: Vec<&str> = vec![""; remaining];
        for segments in selected.into_iter().rev() {
            rows.extend(segments);
        }
        rows
    }
}

/// Split a line into `width`-character segments. An empty line still
/// occupies one row.
fn split_at_width(line: &str, width: usize) -> Vec<&str> {
    if line.is_empty() {
        return vec![""];
    }
    let mut segments = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (offset, _) in line.char_indices() {
        if count == width {
            segments.push(&line[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    segments.push(&line[start..]);
    segments
}
