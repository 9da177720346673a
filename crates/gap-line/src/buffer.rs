//! A UTF-8 aware gap buffer for line editing.
//!
//! Text lives in one contiguous `Vec<u8>` split into three regions:
//!
//! ```text
//!  [ text-before-cursor | gap (unused) | text-after-cursor ]
//!    0..gap_start         gap_start..gap_end   gap_end..buf.len()
//! ```
//!
//! The logical text is `buf[..gap_start]` followed by `buf[gap_end..]`, and
//! the cursor is always at `gap_start`, so inserts and deletes at the
//! cursor are O(1) amortized. Cursor movement copies bytes across the gap.
//!
//! All public positions are **byte** offsets into the logical text. The
//! plain-byte operations (`delete_backward`, `move_left`, ...) are
//! boundary-oblivious by design; the `_char` and word variants never split
//! a multi-byte UTF-8 sequence.

use std::fmt;

/// Smallest gap created by `new` and the floor for every regrow.
const MIN_GAP: usize = 64;

/// A gap buffer holding the text of a single input line (which may itself
/// contain newlines for multiline input).
#[derive(Clone)]
pub struct GapBuffer {
    /// Raw backing store.
    buf: Vec<u8>,
    /// First unused byte of the gap; also the logical cursor position.
    gap_start: usize,
    /// One past the last gap byte.
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer with a small initial gap.
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; MIN_GAP],
            gap_start: 0,
            gap_end: MIN_GAP,
        }
    }

    /// Length of the logical text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.gap_size()
    }

    /// Whether the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor position as a byte offset into the logical text.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    #[inline]
    fn gap_size(&self) -> usize {
        self.gap_end - self.gap_start
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Insert `text` at the cursor. The cursor ends up immediately after
    /// the inserted text.
    pub fn insert(&mut self, text: &str) {
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return;
        }
        self.reserve_gap(bytes.len());
        self.buf[self.gap_start..self.gap_start + bytes.len()].copy_from_slice(bytes);
        self.gap_start += bytes.len();
    }

    /// Insert a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.insert(ch.encode_utf8(&mut utf8));
    }

    /// Grow the backing store so the gap holds at least `needed` bytes.
    ///
    /// The new gap is `max(2 * needed, MIN_GAP)` so that a burst of inserts
    /// amortizes to O(1). The after-gap region is shifted right in place.
    fn reserve_gap(&mut self, needed: usize) {
        if self.gap_size() >= needed {
            return;
        }
        let target = (2 * needed).max(MIN_GAP);
        let grow = target - self.gap_size();
        let old_len = self.buf.len();
        self.buf.resize(old_len + grow, 0);
        if old_len > self.gap_end {
            self.buf.copy_within(self.gap_end..old_len, self.gap_end + grow);
        }
        self.gap_end += grow;
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Delete up to `n` bytes immediately before the cursor, clamped to the
    /// bytes actually there.
    pub fn delete_backward(&mut self, n: usize) {
        self.gap_start -= n.min(self.gap_start);
    }

    /// Delete up to `n` bytes immediately after the cursor, clamped.
    pub fn delete_forward(&mut self, n: usize) {
        self.gap_end += n.min(self.buf.len() - self.gap_end);
    }

    /// Delete the single UTF-8 character before the cursor.
    ///
    /// Scans back at most 4 bytes for a non-continuation byte and treats it
    /// as the character start, so a malformed sequence still loses at most
    /// 4 bytes.
    pub fn delete_char_backward(&mut self) {
        self.delete_backward(self.char_len_before());
    }

    /// Delete the single UTF-8 character after the cursor. The sequence
    /// length comes from the leading byte, defaulting to 1 when that byte
    /// is not a valid sequence start.
    pub fn delete_char_forward(&mut self) {
        self.delete_forward(self.char_len_after());
    }

    /// Delete from the cursor back to the start of the text.
    pub fn delete_to_start(&mut self) {
        self.gap_start = 0;
    }

    /// Delete from the cursor to the end of the text.
    pub fn delete_to_end(&mut self) {
        self.gap_end = self.buf.len();
    }

    /// Delete from the word boundary left of the cursor up to the cursor.
    pub fn delete_word_backward(&mut self) {
        let boundary = self.word_boundary_left();
        self.delete_backward(self.gap_start - boundary);
    }

    /// Delete from the cursor up to the word boundary right of it.
    pub fn delete_word_forward(&mut self) {
        let boundary = self.word_boundary_right();
        self.delete_forward(boundary - self.gap_start);
    }

    // -----------------------------------------------------------------------
    // Cursor movement
    // -----------------------------------------------------------------------

    /// Move the cursor `n` bytes left, clamped, by carrying bytes across
    /// the gap. `copy_within` is overlap-safe when the gap is narrower than
    /// the move.
    pub fn move_left(&mut self, n: usize) {
        let n = n.min(self.gap_start);
        if n == 0 {
            return;
        }
        self.buf
            .copy_within(self.gap_start - n..self.gap_start, self.gap_end - n);
        self.gap_start -= n;
        self.gap_end -= n;
    }

    /// Move the cursor `n` bytes right, clamped.
    pub fn move_right(&mut self, n: usize) {
        let n = n.min(self.buf.len() - self.gap_end);
        if n == 0 {
            return;
        }
        self.buf
            .copy_within(self.gap_end..self.gap_end + n, self.gap_start);
        self.gap_start += n;
        self.gap_end += n;
    }

    /// Move left by one UTF-8 character.
    pub fn move_left_char(&mut self) {
        self.move_left(self.char_len_before());
    }

    /// Move right by one UTF-8 character.
    pub fn move_right_char(&mut self) {
        self.move_right(self.char_len_after());
    }

    /// Move the cursor to the absolute byte offset `pos`, clamped to
    /// `[0, len]`.
    pub fn move_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            self.move_left(self.gap_start - pos);
        } else {
            self.move_right(pos - self.gap_start);
        }
    }

    /// Move the cursor to the start of the text.
    pub fn move_to_start(&mut self) {
        self.move_left(self.gap_start);
    }

    /// Move the cursor to the end of the text.
    pub fn move_to_end(&mut self) {
        self.move_right(self.buf.len() - self.gap_end);
    }

    /// Move left to the nearest word boundary.
    pub fn move_word_left(&mut self) {
        let boundary = self.word_boundary_left();
        self.move_left(self.gap_start - boundary);
    }

    /// Move right to the nearest word boundary.
    pub fn move_word_right(&mut self) {
        let boundary = self.word_boundary_right();
        self.move_right(boundary - self.gap_start);
    }

    /// Byte length of the character ending at the cursor: walk back over at
    /// most 3 continuation bytes looking for a sequence start.
    fn char_len_before(&self) -> usize {
        if self.gap_start == 0 {
            return 0;
        }
        let limit = self.gap_start.saturating_sub(4);
        let mut start = self.gap_start - 1;
        while start > limit && is_continuation(self.buf[start]) {
            start -= 1;
        }
        self.gap_start - start
    }

    /// Byte length of the character starting at the cursor, clamped to the
    /// bytes remaining after it.
    fn char_len_after(&self) -> usize {
        let available = self.buf.len() - self.gap_end;
        if available == 0 {
            return 0;
        }
        utf8_sequence_len(self.buf[self.gap_end]).min(available)
    }

    // -----------------------------------------------------------------------
    // Word boundaries
    // -----------------------------------------------------------------------

    /// Logical offset of the word boundary left of the cursor: walk back
    /// first over whitespace, then over the word itself.
    pub fn word_boundary_left(&self) -> usize {
        let before = &self.buf[..self.gap_start];
        let mut pos = before.len();
        while pos > 0 && is_whitespace(before[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_whitespace(before[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    /// Logical offset of the word boundary right of the cursor: the mirror
    /// walk forward over whitespace then the word. The offset into the
    /// after-gap region translates back to logical coordinates by adding
    /// the cursor position.
    pub fn word_boundary_right(&self) -> usize {
        let after = &self.buf[self.gap_end..];
        let mut pos = 0;
        while pos < after.len() && is_whitespace(after[pos]) {
            pos += 1;
        }
        while pos < after.len() && !is_whitespace(after[pos]) {
            pos += 1;
        }
        self.gap_start + pos
    }

    // -----------------------------------------------------------------------
    // Text access
    // -----------------------------------------------------------------------

    /// Allocated copy of the full logical text. Byte-granular deletes can
    /// leave the store mid-sequence; that decodes lossily rather than
    /// failing.
    pub fn text(&self) -> String {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.buf[..self.gap_start]);
        out.extend_from_slice(&self.buf[self.gap_end..]);
        match String::from_utf8(out) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Zero-copy view of the logical text, available only while the gap
    /// sits at the end of the buffer (cursor at end) and the text is valid
    /// UTF-8. Callers fall back to [`GapBuffer::text`] on `None`.
    pub fn text_slice(&self) -> Option<&str> {
        if self.gap_end == self.buf.len() {
            std::str::from_utf8(&self.buf[..self.gap_start]).ok()
        } else {
            None
        }
    }

    /// The two text regions around the gap. Their concatenation is the
    /// logical text; preferred for scans that must not allocate.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        (&self.buf[..self.gap_start], &self.buf[self.gap_end..])
    }

    /// Replace the whole text; the cursor ends at the text end.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.insert(text);
    }

    /// Drop all text. The gap grows to span the whole buffer; no
    /// reallocation.
    pub fn clear(&mut self) {
        self.gap_start = 0;
        self.gap_end = self.buf.len();
    }

    // -----------------------------------------------------------------------
    // Line/column bookkeeping
    // -----------------------------------------------------------------------

    /// Number of lines in the text (newline count + 1).
    pub fn line_count(&self) -> usize {
        let (before, after) = self.as_slices();
        count_newlines(before) + count_newlines(after) + 1
    }

    /// Zero-based line the cursor is on.
    pub fn current_line(&self) -> usize {
        count_newlines(&self.buf[..self.gap_start])
    }

    /// Byte column of the cursor within its line.
    pub fn current_column(&self) -> usize {
        self.buf[..self.gap_start]
            .iter()
            .rev()
            .take_while(|&&b| b != b'\n')
            .count()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("len", &self.len())
            .field("cursor", &self.cursor())
            .field("gap", &(self.gap_end - self.gap_start))
            .field("text", &self.text())
            .finish()
    }
}

/// Whitespace for word-boundary scans: space, tab, newline, carriage return.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Continuation bytes have the bit pattern `10xxxxxx`.
#[inline]
fn is_continuation(b: u8) -> bool {
    (b & 0xC0) == 0x80
}

/// UTF-8 sequence length from a leading byte, defaulting to 1 for bytes
/// that cannot start a sequence.
#[inline]
fn utf8_sequence_len(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[inline]
fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}
