//! The editor handle: one host, its line index, and the selection.
//!
//! Operations are split by concern across sibling modules (`navigate`,
//! `edit`, `hit`, `render`), each adding an `impl` block to [`TextEngine`].

use crate::error::{Error, Result};
use crate::event::debug_log;
use crate::host::TextHost;
use crate::text::paginate::{self, Repagination, RepaginateMode};
use crate::text::{LineIndex, Selection};
use crate::unicode::floor_char_boundary;

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorOptions {
    /// How edits repaginate.
    pub repaginate: RepaginateMode,
    /// Scroll the active end into view after navigation and edits.
    pub auto_reveal: bool,
    /// Extra distance kept between a revealed caret and the visible edge.
    pub reveal_margin: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            repaginate: RepaginateMode::Incremental,
            auto_reveal: true,
            reveal_margin: 0.0,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_repaginate(mut self, mode: RepaginateMode) -> Self {
        self.repaginate = mode;
        self
    }

    #[must_use]
    pub fn with_auto_reveal(mut self, enabled: bool) -> Self {
        self.auto_reveal = enabled;
        self
    }

    #[must_use]
    pub fn with_reveal_margin(mut self, margin: f32) -> Self {
        self.reveal_margin = margin;
        self
    }

    /// Reject margins that are negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.reveal_margin.is_finite() && self.reveal_margin >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidMetric {
                name: "reveal margin",
                value: self.reveal_margin,
            })
        }
    }
}

/// A text editing core bound to one host.
///
/// The host owns the text; the engine owns the wrapped-line table, the
/// selection and the horizontal gap used by vertical moves. Pagination is
/// lazy: the first operation that needs lines lays out the whole document.
///
/// # Example
///
/// ```
/// use pagedit::{BufferHost, KeyEvent, TextEngine};
///
/// let host = BufferHost::with_grid("hello world", 5, 10);
/// let mut engine = TextEngine::new(host);
/// assert_eq!(engine.line_index().starts(), &[0, 6]);
///
/// engine.set_selection(11, 11);
/// engine.key(KeyEvent::from('!'));
/// assert_eq!(engine.text(), "hello world!");
/// assert_eq!(engine.selection(), (12, 12));
/// ```
#[derive(Debug)]
pub struct TextEngine<H: TextHost> {
    pub(super) host: H,
    pub(super) lines: LineIndex,
    pub(super) selection: Selection,
    pub(super) gap: Option<f32>,
    pub(super) options: EditorOptions,
    paginated: bool,
}

impl<H: TextHost> TextEngine<H> {
    /// Bind a host with default options.
    pub fn new(host: H) -> Self {
        Self {
            host,
            lines: LineIndex::default(),
            selection: Selection::default(),
            gap: None,
            options: EditorOptions::default(),
            paginated: false,
        }
    }

    /// Bind a host with custom options.
    pub fn with_options(host: H, options: EditorOptions) -> Result<Self> {
        options.validate()?;
        let mut engine = Self::new(host);
        engine.options = options;
        Ok(engine)
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: EditorOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Changes to the host's text or width are picked up by a full
    /// repagination before the next operation that needs lines. The
    /// remembered horizontal gap is dropped.
    pub fn host_mut(&mut self) -> &mut H {
        self.paginated = false;
        self.gap = None;
        &mut self.host
    }

    /// Tear down the engine and hand back the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.host.text()
    }

    /// Lay out the whole document again.
    ///
    /// Required after the host changes its logical width.
    pub fn repaginate(&mut self) -> Repagination {
        let report = paginate::repaginate(&mut self.host, &mut self.lines, 0, None);
        self.paginated = true;
        self.normalize_selection();
        report
    }

    /// Repaginate after the host replaced `old` with `new_len` bytes.
    pub(super) fn repaginate_after_edit(
        &mut self,
        old: std::ops::Range<usize>,
        new_len: usize,
    ) -> Repagination {
        if !self.paginated || self.options.repaginate == RepaginateMode::Full {
            return self.repaginate();
        }
        self.lines.splice(old.clone(), new_len);
        let restart = paginate::restart_line(&self.lines, self.host.text(), old.start);
        let report = paginate::repaginate(
            &mut self.host,
            &mut self.lines,
            restart,
            Some(old.start + new_len),
        );
        self.normalize_selection();
        report
    }

    pub(super) fn ensure_paginated(&mut self) {
        if !self.paginated {
            self.repaginate();
        }
    }

    /// The wrapped-line table, laid out if needed.
    pub fn line_index(&mut self) -> &LineIndex {
        self.ensure_paginated();
        &self.lines
    }

    /// Number of display lines.
    pub fn line_count(&mut self) -> usize {
        self.line_index().line_count()
    }

    /// Display line containing `offset`.
    pub fn line_of(&mut self, offset: usize) -> usize {
        self.ensure_paginated();
        self.lines.line_of(offset)
    }

    /// Ordered selection range.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        let sel = self.selection_state();
        (sel.start, sel.end)
    }

    /// Selection including its active side.
    ///
    /// Always within the current text, even before a host change made
    /// through [`host_mut`](Self::host_mut) has been laid out.
    #[must_use]
    pub fn selection_state(&self) -> Selection {
        let mut sel = self.selection;
        sel.normalize(self.host.text());
        sel
    }

    /// Select `start..end`; reversed ranges are swapped and out-of-range ends
    /// clamped. The active side is the end.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end);
        self.gap = None;
        self.normalize_selection();
    }

    /// Text covered by the selection.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        let sel = self.selection_state();
        &self.host.text()[sel.start..sel.end]
    }

    /// Horizontal position remembered across consecutive vertical moves.
    #[must_use]
    pub fn horizontal_gap(&self) -> Option<f32> {
        self.gap
    }

    pub(super) fn normalize_selection(&mut self) {
        let before = self.selection;
        self.selection.normalize(self.host.text());
        if before.start.max(before.end) > self.selection.end {
            debug_log!(
                "selection {}..{} clamped to {}..{}",
                before.start,
                before.end,
                self.selection.start,
                self.selection.end
            );
        }
    }

    /// Clamp an incoming offset to the text and snap it to a character
    /// boundary.
    pub(super) fn clamp_offset(&self, offset: usize) -> usize {
        floor_char_boundary(self.host.text(), offset)
    }

    /// The furthest a caret may sit on `line`: the text end on the last
    /// line, otherwise the boundary before the line's final character (its
    /// terminator or hanging space, or the last character of a split word).
    pub(super) fn last_position(&self, line: usize) -> usize {
        let text = self.host.text();
        let range = self.lines.line_range(line, text.len());
        if line >= self.lines.last_line() {
            return text.len();
        }
        self.host.prev_boundary(text, range.end).max(range.start)
    }
}
