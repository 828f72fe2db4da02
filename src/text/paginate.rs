//! Word-wrapping pagination into a [`LineIndex`].
//!
//! A display line ends at a line terminator, or before the first chunk (as
//! reported by [`TextHost::word_break`]) that would push it past the wrap
//! width. Whitespace after a line's last chunk hangs off the end of that line
//! and is never measured against the width. A chunk wider than the whole line
//! is split at the widest prefix that fits, and never into pieces smaller
//! than one character boundary step, so every line consumes at least one
//! character of non-empty input.

use crate::event::{LogLevel, debug_log, emit_event, emit_log, events_enabled};
use crate::host::TextHost;
use crate::text::LineIndex;
use crate::unicode::{
    floor_char_boundary, grapheme_indices, is_inline_whitespace, is_line_terminator,
    terminator_len_at,
};

/// How far repagination walks after an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepaginateMode {
    /// Rebuild every line from the top of the document.
    Full,
    /// Resume just before the edited word and stop once line starts match the
    /// previous layout past the edit.
    #[default]
    Incremental,
}

/// What one repagination pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Repagination {
    /// Line the walk started from.
    pub first_line: usize,
    /// Number of lines laid out.
    pub lines_walked: usize,
    /// Whether the walk stopped early and kept the old suffix.
    pub reused_suffix: bool,
    /// Line count afterwards.
    pub line_count: usize,
}

/// Number of bytes of `text` that make up the next display line at `width`.
///
/// Returns 0 only for empty input.
pub fn compute_line_length<H: TextHost + ?Sized>(host: &H, text: &str, width: f32) -> usize {
    let mut consumed = 0usize;
    let mut used = 0.0f32;

    while consumed < text.len() {
        let rest = &text[consumed..];
        let spaces = leading_whitespace_len(rest);
        if spaces > 0 {
            used += host.measure(&rest[..spaces]);
            consumed += spaces;
        }
        if consumed == text.len() {
            break;
        }

        let terminator = terminator_len_at(text, consumed);
        if terminator > 0 {
            return consumed + terminator;
        }

        let rest = &text[consumed..];
        let chunk = chunk_len(host, rest);
        let chunk_width = host.measure(&rest[..chunk]);
        if used + chunk_width > width {
            if consumed > 0 {
                return consumed;
            }
            return forced_split(host, rest, chunk, width);
        }
        used += chunk_width;
        consumed += chunk;
    }

    consumed
}

/// Length of the whitespace run at the start of `rest`, in whole grapheme
/// clusters. A cluster led by a space (a space carrying a combining mark)
/// counts as whitespace, so no line starts inside it.
fn leading_whitespace_len(rest: &str) -> usize {
    grapheme_indices(rest)
        .find(|(_, grapheme)| !grapheme.starts_with(is_inline_whitespace))
        .map_or(rest.len(), |(idx, _)| idx)
}

/// Length of the next unbreakable chunk, kept non-empty, on a character
/// boundary, and short of any line terminator.
fn chunk_len<H: TextHost + ?Sized>(host: &H, rest: &str) -> usize {
    let mut chunk = floor_char_boundary(rest, host.word_break(rest));
    if let Some(term) = rest[..chunk].find(is_line_terminator) {
        chunk = term;
    }
    if chunk == 0 {
        chunk = rest.chars().next().map_or(0, char::len_utf8);
    }
    chunk
}

/// Split an over-wide chunk at the start of a line.
fn forced_split<H: TextHost + ?Sized>(host: &H, rest: &str, chunk: usize, width: f32) -> usize {
    let fitted = floor_char_boundary(rest, host.fit_forward(&rest[..chunk], width));
    let mut step = floor_char_boundary(rest, host.next_boundary(rest, 0));
    if step == 0 {
        step = rest.chars().next().map_or(0, char::len_utf8);
    }
    fitted.max(step)
}

/// Line to resume from after an edit starting at `offset`: the line before
/// the one holding the start of the word that contains `offset`.
///
/// Going back to the word start covers edits that change whether the word
/// fits on the previous line.
#[must_use]
pub fn restart_line(index: &LineIndex, text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    let word_start = text[..offset]
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    index.line_of(word_start).saturating_sub(1)
}

/// Rebuild `index` from `start_line` on and report the new logical height.
///
/// When `change_stop` is set, the walk stops as soon as a computed line start
/// at or past that offset equals the recorded start for the same line; the
/// rest of the table is reused. Without it every line is recomputed.
pub fn repaginate<H: TextHost + ?Sized>(
    host: &mut H,
    index: &mut LineIndex,
    start_line: usize,
    change_stop: Option<usize>,
) -> Repagination {
    let report = rebuild(&*host, index, start_line, change_stop);
    let line_height = host.line_height();
    host.set_logical_height(index.line_count() as f32 * line_height);

    debug_log!(
        "repaginate: first_line={} walked={} reused={} lines={}",
        report.first_line,
        report.lines_walked,
        report.reused_suffix,
        report.line_count
    );
    if events_enabled() {
        emit_event(
            "repaginate",
            &format!(
                "{{\"lines\":{},\"reused\":{}}}",
                report.line_count, report.reused_suffix
            ),
        );
    }
    report
}

fn rebuild<H: TextHost + ?Sized>(
    host: &H,
    index: &mut LineIndex,
    start_line: usize,
    change_stop: Option<usize>,
) -> Repagination {
    let text = host.text();
    let len = text.len();
    let width = host.logical_bounds().width();
    let safe = change_stop.map_or(len, |stop| stop.min(len));
    let starts = index.starts_mut();

    if starts.is_empty() {
        starts.push(0);
    } else {
        starts[0] = 0;
    }

    let mut line = start_line.min(starts.len() - 1);
    while line > 0 && (starts[line] >= len || !text.is_char_boundary(starts[line])) {
        line -= 1;
    }
    if line < start_line.min(starts.len() - 1) {
        emit_log(LogLevel::Warn, "repaginate: stale line start, walking back");
    }

    // Previous starts past the restart line. Entries at or past `safe` were
    // shifted onto unchanged text, so their layout still holds.
    let tail = starts.split_off(line + 1);
    let first_line = line;
    let mut pos = starts[line];
    let mut walked = 0;
    let mut reused = false;

    loop {
        let consumed = compute_line_length(host, &text[pos..], width);
        walked += 1;
        let next = pos + consumed;

        if next >= len {
            // A trailing terminator leaves an empty final line at `len`.
            if next > pos && text[pos..next].ends_with(is_line_terminator) {
                starts.push(len);
            }
            break;
        }

        if next >= safe {
            if let Ok(found) = tail.binary_search(&next) {
                starts.extend_from_slice(&tail[found..]);
                reused = true;
                break;
            }
        }

        starts.push(next);
        pos = next;
    }

    Repagination {
        first_line,
        lines_walked: walked,
        reused_suffix: reused,
        line_count: starts.len(),
    }
}
