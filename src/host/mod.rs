//! The host capability boundary.
//!
//! [`TextHost`] is everything the editing core knows about the outside
//! world: where it is on screen, what the text is, how wide a run of text is,
//! where words and characters break, and how to draw. The host owns the
//! buffer; the core only reads it through [`TextHost::text`] and changes it
//! through [`TextHost::replace_text`].
//!
//! All offsets are byte offsets into the `&str` returned by `text`.
//! Measurement methods receive string slices; drawing methods receive byte
//! ranges into the host's own buffer.

mod buffer_host;

pub use buffer_host::BufferHost;

use crate::geometry::{Point, Rect};
use crate::unicode::{grapheme_indices, next_grapheme_boundary, prev_grapheme_boundary};
use std::ops::Range;

/// Capabilities a host provides to [`TextEngine`](crate::TextEngine).
///
/// Hosts must not call back into the engine from any of these methods.
pub trait TextHost {
    /// Currently visible part of the document, in editor coordinates.
    fn visible_bounds(&self) -> Rect;

    /// Full scrollable extent of the document. Its width is the wrap width.
    fn logical_bounds(&self) -> Rect;

    /// Advisory request to resize the logical bounds after repagination.
    fn set_logical_height(&mut self, _height: f32) {}

    /// Advisory request to move the visible bounds' lower-left corner to
    /// `origin`.
    fn scroll_to(&mut self, _origin: Point) {}

    /// The whole buffer. Must stay valid until the next mutating call.
    fn text(&self) -> &str;

    /// Replace the bytes in `range` with `text`. Must not fail partially.
    fn replace_text(&mut self, range: Range<usize>, text: &str);

    /// Distance between consecutive line baselines.
    fn line_height(&self) -> f32;

    /// Width of a run of text.
    fn measure(&self, text: &str) -> f32;

    /// Number of bytes from the start of `text` that fit in `width`.
    ///
    /// The default assumes measurement is additive over grapheme clusters.
    fn fit_forward(&self, text: &str, width: f32) -> usize {
        let mut total = 0.0;
        let mut fitted = 0;
        for (idx, grapheme) in grapheme_indices(text) {
            total += self.measure(grapheme);
            if total > width {
                break;
            }
            fitted = idx + grapheme.len();
        }
        fitted
    }

    /// Number of bytes from the end of `text` that fit in `width`.
    fn fit_reverse(&self, text: &str, width: f32) -> usize {
        let mut total = 0.0;
        let mut start = text.len();
        while start > 0 {
            let prev = prev_grapheme_boundary(text, start);
            total += self.measure(&text[prev..start]);
            if total > width {
                break;
            }
            start = prev;
        }
        text.len() - start
    }

    /// Draw the text in `range` with its lower-left corner at `origin`.
    fn draw_string(&mut self, _range: Range<usize>, _origin: Point) {}

    /// Draw a selection highlight, or a zero-width caret.
    fn draw_selection(&mut self, _rect: Rect) {}

    /// Byte length of the unbreakable chunk at the start of `text`.
    ///
    /// The default breaks at whitespace. Incremental repagination relies on
    /// chunks never containing whitespace.
    fn word_break(&self, text: &str) -> usize {
        let word = text
            .find(char::is_whitespace)
            .unwrap_or(text.len());
        if word == 0 {
            next_grapheme_boundary(text, 0)
        } else {
            word
        }
    }

    /// Offset of the character boundary after `offset`.
    fn next_boundary(&self, text: &str, offset: usize) -> usize {
        next_grapheme_boundary(text, offset)
    }

    /// Offset of the character boundary before `offset`.
    fn prev_boundary(&self, text: &str, offset: usize) -> usize {
        prev_grapheme_boundary(text, offset)
    }

    /// Step `count` boundaries forward (positive) or backward (negative).
    fn step_boundaries(&self, text: &str, offset: usize, count: isize) -> usize {
        let mut pos = offset;
        for _ in 0..count.unsigned_abs() {
            let next = if count > 0 {
                self.next_boundary(text, pos)
            } else {
                self.prev_boundary(text, pos)
            };
            if next == pos {
                break;
            }
            pos = next;
        }
        pos
    }
}

impl<H: TextHost + ?Sized> TextHost for Box<H> {
    fn visible_bounds(&self) -> Rect {
        (**self).visible_bounds()
    }

    fn logical_bounds(&self) -> Rect {
        (**self).logical_bounds()
    }

    fn set_logical_height(&mut self, height: f32) {
        (**self).set_logical_height(height);
    }

    fn scroll_to(&mut self, origin: Point) {
        (**self).scroll_to(origin);
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn replace_text(&mut self, range: Range<usize>, text: &str) {
        (**self).replace_text(range, text);
    }

    fn line_height(&self) -> f32 {
        (**self).line_height()
    }

    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn fit_forward(&self, text: &str, width: f32) -> usize {
        (**self).fit_forward(text, width)
    }

    fn fit_reverse(&self, text: &str, width: f32) -> usize {
        (**self).fit_reverse(text, width)
    }

    fn draw_string(&mut self, range: Range<usize>, origin: Point) {
        (**self).draw_string(range, origin);
    }

    fn draw_selection(&mut self, rect: Rect) {
        (**self).draw_selection(rect);
    }

    fn word_break(&self, text: &str) -> usize {
        (**self).word_break(text)
    }

    fn next_boundary(&self, text: &str, offset: usize) -> usize {
        (**self).next_boundary(text, offset)
    }

    fn prev_boundary(&self, text: &str, offset: usize) -> usize {
        (**self).prev_boundary(text, offset)
    }

    fn step_boundaries(&self, text: &str, offset: usize, count: isize) -> usize {
        (**self).step_boundaries(text, offset, count)
    }
}
