//! Grapheme-cluster boundary stepping over byte offsets.
//!
//! Every helper accepts any offset, clamps it to the string, and snaps it
//! down to a UTF-8 character boundary before looking for clusters.

use unicode_segmentation::{GraphemeCursor, UnicodeSegmentation};

/// Clamp `offset` to `s.len()` and round it down to a character boundary.
#[must_use]
pub fn floor_char_boundary(s: &str, offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    let mut pos = offset;
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Byte offset of the grapheme boundary after `offset`, or `s.len()`.
#[must_use]
pub fn next_grapheme_boundary(s: &str, offset: usize) -> usize {
    let pos = floor_char_boundary(s, offset);
    if pos >= s.len() {
        return s.len();
    }
    let mut cursor = GraphemeCursor::new(pos, s.len(), true);
    match cursor.next_boundary(s, 0) {
        Ok(Some(next)) => next,
        Ok(None) => s.len(),
        Err(_) => next_char_boundary(s, pos),
    }
}

/// Byte offset of the grapheme boundary before `offset`, or 0.
#[must_use]
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> usize {
    let pos = floor_char_boundary(s, offset);
    if pos == 0 {
        return 0;
    }
    let mut cursor = GraphemeCursor::new(pos, s.len(), true);
    match cursor.prev_boundary(s, 0) {
        Ok(Some(prev)) => prev,
        Ok(None) => 0,
        Err(_) => prev_char_boundary(s, pos),
    }
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(s.len(), |c| pos + c.len_utf8())
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].chars().next_back().map_or(0, |c| pos - c.len_utf8())
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Check whether `c` ends a line.
#[inline]
#[must_use]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whitespace that does not end a line.
#[inline]
#[must_use]
pub fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_line_terminator(c)
}

/// Length of the line terminator starting at `pos`: 2 for `"\r\n"`, 1 for a
/// lone `'\n'` or `'\r'`, 0 otherwise.
#[must_use]
pub fn terminator_len_at(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    match bytes.get(pos) {
        Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => 2,
        Some(b'\r' | b'\n') => 1,
        _ => 0,
    }
}

/// Strip one trailing line terminator (`"\r\n"`, `"\n"` or `"\r"`).
#[must_use]
pub fn trim_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
