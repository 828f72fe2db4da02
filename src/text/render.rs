//! Drawing pass: selection highlight, visible text runs, caret.
//!
//! [`TextEngine::draw_ops`] computes what to draw without touching the host;
//! [`TextEngine::draw`] sends the same operations to it.

use crate::geometry::{Point, Rect};
use crate::host::TextHost;
use crate::text::TextEngine;
use crate::unicode::trim_line_terminator;
use std::ops::Range;

/// One drawing request.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A selection highlight, or a zero-width caret.
    Selection(Rect),
    /// Text from the host buffer with its lower-left corner at `origin`.
    Text { range: Range<usize>, origin: Point },
}

impl<H: TextHost> TextEngine<H> {
    /// Draw operations for the current state, in painting order: selection
    /// rectangles, one text run per visible line, then the caret when the
    /// selection is empty.
    pub fn draw_ops(&mut self) -> Vec<DrawOp> {
        self.ensure_paginated();
        let mut ops = Vec::new();
        if !self.selection.is_empty() {
            self.push_selection_rects(&mut ops);
        }
        self.push_text_runs(&mut ops);
        if self.selection.is_empty() {
            ops.push(DrawOp::Selection(self.caret_rect_at(self.selection.end)));
        }
        ops
    }

    /// Paint through the host.
    pub fn draw(&mut self) {
        for op in self.draw_ops() {
            match op {
                DrawOp::Selection(rect) => self.host.draw_selection(rect),
                DrawOp::Text { range, origin } => self.host.draw_string(range, origin),
            }
        }
    }

    /// Lines overlapping the visible bounds.
    pub fn visible_lines(&mut self) -> Range<usize> {
        self.ensure_paginated();
        self.visible_range()
    }

    fn visible_range(&self) -> Range<usize> {
        let visible = self.host.visible_bounds();
        let logical = self.host.logical_bounds();
        let line_height = self.host.line_height();
        let count = self.lines.line_count();

        let first = ((logical.top - visible.top) / line_height).floor();
        let last = ((logical.top - visible.bottom) / line_height).ceil();
        let clamp = |row: f32| {
            if row.is_nan() || row < 0.0 {
                0
            } else {
                (row as usize).min(count)
            }
        };
        let first = clamp(first);
        first..clamp(last).max(first)
    }

    fn push_selection_rects(&self, ops: &mut Vec<DrawOp>) {
        let bounds = self.host.logical_bounds();
        let line_height = self.host.line_height();
        let start = self.caret_rect_at(self.selection.start);
        let end = self.caret_rect_at(self.selection.end);

        if start.top == end.top {
            ops.push(DrawOp::Selection(Rect::new(
                start.left, start.bottom, end.left, start.top,
            )));
            return;
        }

        ops.push(DrawOp::Selection(Rect::new(
            start.left,
            start.bottom,
            bounds.right,
            start.top,
        )));
        // Whole lines between the first and last.
        if start.bottom - end.top >= line_height {
            ops.push(DrawOp::Selection(Rect::new(
                bounds.left,
                end.top,
                bounds.right,
                start.bottom,
            )));
        }
        if end.left > bounds.left {
            ops.push(DrawOp::Selection(Rect::new(
                bounds.left,
                end.bottom,
                end.left,
                end.top,
            )));
        }
    }

    fn push_text_runs(&self, ops: &mut Vec<DrawOp>) {
        let text = self.host.text();
        let left = self.host.logical_bounds().left;
        let line_height = self.host.line_height();
        for line in self.visible_range() {
            let range = self.lines.line_range(line, text.len());
            let shown = trim_line_terminator(&text[range.clone()]).len();
            ops.push(DrawOp::Text {
                range: range.start..range.start + shown,
                origin: Point::new(left, self.line_top(line) - line_height),
            });
        }
    }
}
