//! Hit-testing, mouse selection, and scroll-reveal.
//!
//! Line `l` occupies the band from `top - (l + 1) * line_height` up to
//! `top - l * line_height` of the logical bounds.

use crate::event::{debug_log, emit_event, events_enabled};
use crate::geometry::{Point, Rect};
use crate::host::TextHost;
use crate::text::{ActiveSide, TextEngine};

/// A scroll issued by [`TextEngine::reveal_selection`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// New lower-left corner of the visible bounds.
    pub origin: Point,
    /// Distance moved from the previous origin.
    pub delta: Point,
}

impl<H: TextHost> TextEngine<H> {
    /// Character boundary nearest to the point `(x, y)`.
    ///
    /// Points left or right of the text clamp to the logical bounds; points
    /// above the first line or below the last hit those lines.
    pub fn coord_to_offset(&mut self, x: f32, y: f32) -> usize {
        self.ensure_paginated();
        let bounds = self.host.logical_bounds();
        let text = self.host.text();

        let x = x.max(bounds.left).min(bounds.right.max(bounds.left));
        let row = ((bounds.top - y) / self.host.line_height()).floor();
        let line = if row.is_nan() || row < 0.0 {
            0
        } else {
            (row as usize).min(self.lines.last_line())
        };

        let range = self.lines.line_range(line, text.len());
        let line_text = &text[range.clone()];
        let target = x - bounds.left;
        let mut offset = self.host.fit_forward(line_text, target);
        if offset < line_text.len() {
            // Round to whichever neighbouring boundary is closer.
            let next = self.host.next_boundary(line_text, offset);
            let before = self.host.measure(&line_text[..offset]);
            let after = self.host.measure(&line_text[..next]);
            if target - before > after - target {
                offset = next;
            }
        }
        (range.start + offset).min(self.last_position(line))
    }

    /// Place the caret at a point, or with `extend` stretch the selection to
    /// it: a point before the selection moves its start, anything else its
    /// end.
    pub fn click(&mut self, x: f32, y: f32, extend: bool) {
        let offset = self.coord_to_offset(x, y);
        if extend {
            if offset < self.selection.start {
                self.selection.start = offset;
                self.selection.active = ActiveSide::Start;
            } else {
                self.selection.end = offset;
                self.selection.active = ActiveSide::End;
            }
        } else {
            self.selection.collapse_to(offset);
        }
        self.gap = None;
        self.normalize_selection();
    }

    /// Move the active end of the selection to a point.
    pub fn drag(&mut self, x: f32, y: f32) {
        let offset = self.coord_to_offset(x, y);
        self.selection.set_active_offset(offset);
        self.gap = None;
        self.normalize_selection();
        if self.options.auto_reveal {
            self.reveal_selection();
        }
    }

    /// Zero-width rectangle of the caret at `offset`, spanning its line.
    pub fn caret_rect(&mut self, offset: usize) -> Rect {
        self.ensure_paginated();
        let offset = self.clamp_offset(offset);
        self.caret_rect_at(offset)
    }

    pub(super) fn caret_rect_at(&self, offset: usize) -> Rect {
        let text = self.host.text();
        let bounds = self.host.logical_bounds();
        let line = self.lines.line_of(offset);
        let start = self.lines.line_start(line, text.len()).min(offset);
        let x = bounds.left + self.host.measure(&text[start..offset]);
        let top = self.line_top(line);
        Rect::new(x, top - self.host.line_height(), x, top)
    }

    pub(super) fn line_top(&self, line: usize) -> f32 {
        self.host.logical_bounds().top - line as f32 * self.host.line_height()
    }

    /// Scroll the active end of the selection into view.
    ///
    /// Returns the scroll sent to the host, or `None` when the caret is
    /// already visible (with the configured margin).
    pub fn reveal_selection(&mut self) -> Option<ScrollRequest> {
        self.ensure_paginated();
        let caret = self.caret_rect_at(self.selection.active_offset());
        let visible = self.host.visible_bounds();
        let logical = self.host.logical_bounds();
        let margin = self.options.reveal_margin;

        let wanted = Rect::new(
            caret.left - margin,
            caret.bottom - margin,
            caret.right + margin,
            caret.top + margin,
        );
        if visible.contains_rect(&wanted) {
            return None;
        }

        let mut origin = visible.origin();
        if wanted.left < visible.left {
            origin.x = wanted.left;
        } else if wanted.right > visible.right {
            origin.x = wanted.right - visible.width();
        }
        if wanted.top > visible.top {
            origin.y = wanted.top - visible.height();
        } else if wanted.bottom < visible.bottom {
            origin.y = wanted.bottom;
        }

        // Keep the viewport inside the document; a short document pins it
        // to the top.
        let max_x = (logical.right - visible.width()).max(logical.left);
        origin.x = origin.x.max(logical.left).min(max_x);
        let max_y = logical.top - visible.height();
        origin.y = origin.y.max(logical.bottom.min(max_y)).min(max_y);

        if origin == visible.origin() {
            return None;
        }

        let delta = Point::new(origin.x - visible.left, origin.y - visible.bottom);
        debug_log!(
            "reveal: scroll to ({}, {}) by ({}, {})",
            origin.x,
            origin.y,
            delta.x,
            delta.y
        );
        self.host.scroll_to(origin);
        if events_enabled() {
            emit_event(
                "reveal",
                &format!("{{\"x\":{},\"y\":{}}}", origin.x, origin.y),
            );
        }
        Some(ScrollRequest { origin, delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::BufferHost;
    use crate::input::{KeyCode, KeyEvent};
    use crate::text::EditorOptions;

    fn engine(text: &str, columns: u32, rows: u32) -> TextEngine<BufferHost> {
        TextEngine::new(BufferHost::with_grid(text, columns, rows))
    }

    #[test]
    fn test_coord_rounds_to_nearest_boundary() {
        let mut eng = engine("hello world", 5, 10);
        assert_eq!(eng.coord_to_offset(2.4, -0.5), 2);
        assert_eq!(eng.coord_to_offset(2.6, -0.5), 3);
        assert_eq!(eng.coord_to_offset(0.0, -1.5), 6);
    }

    #[test]
    fn test_coord_clamps_outside_points() {
        let mut eng = engine("hello world", 5, 10);
        // Past the right edge of a wrapped line: before its hanging space
        assert_eq!(eng.coord_to_offset(50.0, -0.5), 5);
        assert_eq!(eng.coord_to_offset(-3.0, -0.5), 0);
        assert_eq!(eng.coord_to_offset(1.0, 30.0), 1);
        assert_eq!(eng.coord_to_offset(50.0, -50.0), 11);
    }

    #[test]
    fn test_coord_on_wide_chars() {
        let mut eng = engine("漢字", 10, 2);
        assert_eq!(eng.coord_to_offset(0.9, -0.5), 0);
        assert_eq!(eng.coord_to_offset(1.1, -0.5), 3);
        assert_eq!(eng.coord_to_offset(3.5, -0.5), 6);
    }

    #[test]
    fn test_click_and_shift_click() {
        let mut eng = engine("abcdefghij", 20, 2);
        eng.click(5.0, -0.5, false);
        assert_eq!(eng.selection(), (5, 5));
        eng.click(8.0, -0.5, true);
        assert_eq!(eng.selection(), (5, 8));
        assert_eq!(eng.selection_state().active, ActiveSide::End);
        eng.click(2.0, -0.5, true);
        assert_eq!(eng.selection(), (2, 8));
        assert_eq!(eng.selection_state().active, ActiveSide::Start);
    }

    #[test]
    fn test_drag_moves_active_end_and_flips() {
        let mut eng = engine("abcdefghij", 20, 2);
        eng.click(4.0, -0.5, false);
        eng.drag(7.0, -0.5);
        assert_eq!(eng.selection(), (4, 7));
        eng.drag(1.0, -0.5);
        assert_eq!(eng.selection(), (1, 4));
        assert_eq!(eng.selection_state().active, ActiveSide::Start);
    }

    #[test]
    fn test_caret_rect() {
        let mut eng = engine("ab\ncd", 10, 5);
        assert_eq!(eng.caret_rect(4), Rect::new(1.0, -2.0, 1.0, -1.0));
        assert_eq!(eng.caret_rect(0), Rect::new(0.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn test_reveal_noop_when_visible() {
        let mut eng = engine("abc", 10, 5);
        assert_eq!(eng.reveal_selection(), None);
        assert!(eng.host().scroll_requests().is_empty());
    }

    #[test]
    fn test_reveal_scrolls_down_and_back_up() {
        let mut eng = engine("a\nb\nc\nd\ne\nf", 4, 2);
        eng.set_selection(8, 8);
        let request = eng.reveal_selection().expect("caret below viewport");
        assert_eq!(request.origin, Point::new(0.0, -5.0));
        assert_eq!(request.delta, Point::new(0.0, -3.0));
        assert_eq!(eng.host().visible_bounds(), Rect::new(0.0, -5.0, 4.0, -3.0));

        eng.set_selection(0, 0);
        let request = eng.reveal_selection().expect("caret above viewport");
        assert_eq!(request.origin, Point::new(0.0, -2.0));
    }

    #[test]
    fn test_reveal_margin_is_clamped_to_document() {
        let options = EditorOptions::default().with_reveal_margin(1.0);
        let host = BufferHost::with_grid("a\nb\nc\nd\ne\nf", 4, 2);
        let mut eng = TextEngine::with_options(host, options).expect("valid options");
        eng.set_selection(10, 10);
        let request = eng.reveal_selection().expect("caret below viewport");
        // Line 5 bottom is -6, and the margin cannot scroll past the end
        assert_eq!(request.origin, Point::new(0.0, -6.0));
    }

    #[test]
    fn test_arrow_keys_auto_reveal() {
        let mut eng = engine("a\nb\nc\nd", 4, 2);
        for _ in 0..3 {
            eng.key(KeyEvent::key(KeyCode::Down));
        }
        assert_eq!(eng.selection(), (6, 6));
        assert_eq!(eng.host().visible_bounds().bottom, -4.0);
        assert!(!eng.host().scroll_requests().is_empty());
    }

    #[test]
    fn test_auto_reveal_disabled() {
        let options = EditorOptions::default().with_auto_reveal(false);
        let host = BufferHost::with_grid("a\nb\nc\nd", 4, 2);
        let mut eng = TextEngine::with_options(host, options).expect("valid options");
        for _ in 0..3 {
            eng.key(KeyEvent::key(KeyCode::Down));
        }
        assert!(eng.host().scroll_requests().is_empty());
    }
}
