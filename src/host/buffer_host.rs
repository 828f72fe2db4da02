//! Headless `String`-backed host with monospace cell metrics.
//!
//! Useful on its own for terminal front ends (one cell = one column) and as
//! the reference host in tests and benches. Draw calls and scroll requests are
//! recorded instead of rendered.

use crate::error::{Error, Result, positive_metric};
use crate::event::{LogLevel, emit_log};
use crate::geometry::{Point, Rect};
use crate::host::TextHost;
use crate::text::DrawOp;
use crate::unicode::{WidthMethod, cell_count};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_TAB_CELLS: usize = 4;

/// An owned text buffer with fixed-pitch measurement.
#[derive(Clone, Debug)]
pub struct BufferHost {
    text: String,
    visible: Rect,
    logical: Rect,
    line_height: f32,
    cell_width: f32,
    tab_cells: usize,
    width_method: WidthMethod,
    draw_ops: Vec<DrawOp>,
    scroll_requests: Vec<Point>,
}

impl BufferHost {
    /// Create a host showing `visible`; the logical bounds start out equal to it.
    ///
    /// Line height and cell width default to 1, so widths are in cells.
    #[must_use]
    pub fn new(text: &str, visible: Rect) -> Self {
        Self {
            text: text.to_string(),
            visible,
            logical: visible,
            line_height: 1.0,
            cell_width: 1.0,
            tab_cells: DEFAULT_TAB_CELLS,
            width_method: WidthMethod::default(),
            draw_ops: Vec::new(),
            scroll_requests: Vec::new(),
        }
    }

    /// Create a host whose viewport is `columns` cells wide and `rows` lines
    /// tall, with its top-left corner at the origin.
    #[must_use]
    pub fn with_grid(text: &str, columns: u32, rows: u32) -> Self {
        let visible = Rect::new(0.0, -(rows as f32), columns as f32, 0.0);
        Self::new(text, visible)
    }

    /// Set the line pitch.
    pub fn with_line_height(mut self, line_height: f32) -> Result<Self> {
        self.line_height = positive_metric("line height", line_height)?;
        Ok(self)
    }

    /// Set the width of one cell.
    pub fn with_cell_width(mut self, cell_width: f32) -> Result<Self> {
        self.cell_width = positive_metric("cell width", cell_width)?;
        Ok(self)
    }

    /// Set how many cells a tab occupies.
    #[must_use]
    pub fn with_tab_width(mut self, tab_cells: usize) -> Self {
        self.tab_cells = tab_cells;
        self
    }

    /// Set how ambiguous-width characters are counted.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Current buffer contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer. The engine must be repaginated afterwards.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Replace a byte range after checking it against the buffer.
    pub fn try_replace(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        let len = self.text.len();
        if range.start > range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(Error::NotCharBoundary { offset });
            }
        }
        self.text.replace_range(range, text);
        Ok(())
    }

    /// Change the viewport (and wrap) width. The engine must be repaginated
    /// afterwards.
    pub fn set_width(&mut self, width: f32) {
        self.visible.right = self.visible.left + width;
        self.logical.left = self.visible.left;
        self.logical.right = self.visible.right;
    }

    /// Draw operations recorded since the last [`take_draw_ops`](Self::take_draw_ops).
    #[must_use]
    pub fn draw_ops(&self) -> &[DrawOp] {
        &self.draw_ops
    }

    /// Take and clear the recorded draw operations.
    pub fn take_draw_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.draw_ops)
    }

    /// Every scroll origin requested so far.
    #[must_use]
    pub fn scroll_requests(&self) -> &[Point] {
        &self.scroll_requests
    }

    fn cells(&self, text: &str) -> usize {
        cell_count(text, self.width_method, self.tab_cells)
    }
}

impl TextHost for BufferHost {
    fn visible_bounds(&self) -> Rect {
        self.visible
    }

    fn logical_bounds(&self) -> Rect {
        self.logical
    }

    fn set_logical_height(&mut self, height: f32) {
        // Never shorter than the viewport
        self.logical.bottom = self.logical.top - height.max(self.visible.height());
    }

    fn scroll_to(&mut self, origin: Point) {
        self.scroll_requests.push(origin);
        self.visible = self.visible.moved_to(origin);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn replace_text(&mut self, range: Range<usize>, text: &str) {
        if let Err(err) = self.try_replace(range, text) {
            emit_log(LogLevel::Error, &format!("buffer host rejected edit: {err}"));
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn measure(&self, text: &str) -> f32 {
        self.cells(text) as f32 * self.cell_width
    }

    fn fit_forward(&self, text: &str, width: f32) -> usize {
        let mut cells = 0usize;
        let mut fitted = 0;
        for (idx, grapheme) in text.grapheme_indices(true) {
            cells += self.cells(grapheme);
            if cells as f32 * self.cell_width > width {
                break;
            }
            fitted = idx + grapheme.len();
        }
        fitted
    }

    fn fit_reverse(&self, text: &str, width: f32) -> usize {
        let mut cells = 0usize;
        let mut start = text.len();
        for (idx, grapheme) in text.grapheme_indices(true).rev() {
            cells += self.cells(grapheme);
            if cells as f32 * self.cell_width > width {
                break;
            }
            start = idx;
        }
        text.len() - start
    }

    fn draw_string(&mut self, range: Range<usize>, origin: Point) {
        self.draw_ops.push(DrawOp::Text { range, origin });
    }

    fn draw_selection(&mut self, rect: Rect) {
        self.draw_ops.push(DrawOp::Selection(rect));
    }
}
