//! Programmatic text replacement.

use crate::host::TextHost;
use crate::text::TextEngine;
use crate::text::paginate::Repagination;

impl<H: TextHost> TextEngine<H> {
    /// Replace the bytes between `offset1` and `offset2` with `new_text`.
    ///
    /// Offsets are clamped to the text and snapped to character boundaries;
    /// a reversed pair is swapped. Selection ends before the range stay put,
    /// ends after it shift with the text, and ends inside it are clamped to
    /// the end of the inserted text. The host performs the edit, then the
    /// affected lines are laid out again.
    pub fn replace_text(&mut self, offset1: usize, offset2: usize, new_text: &str) -> Repagination {
        self.ensure_paginated();
        let a = self.clamp_offset(offset1);
        let b = self.clamp_offset(offset2);
        let range = a.min(b)..a.max(b);

        self.selection.adjust_for_replace(range.clone(), new_text.len());
        self.host.replace_text(range.clone(), new_text);
        self.gap = None;
        self.repaginate_after_edit(range, new_text.len())
    }
}
