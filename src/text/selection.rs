//! Selection model: an ordered byte range plus the end that moves.

use crate::unicode::floor_char_boundary;

/// Which end of a selection moves when it is extended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveSide {
    Start,
    #[default]
    End,
}

impl ActiveSide {
    /// The other end.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// A selected byte range. Empty when `start == end`, in which case it is a
/// caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub active: ActiveSide,
}

impl Selection {
    /// A range with the active end at `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            active: ActiveSide::End,
        }
    }

    /// An empty selection at `offset`.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Offset of the end that moves.
    #[must_use]
    pub fn active_offset(&self) -> usize {
        match self.active {
            ActiveSide::Start => self.start,
            ActiveSide::End => self.end,
        }
    }

    /// Move the active end to `offset`.
    pub fn set_active_offset(&mut self, offset: usize) {
        match self.active {
            ActiveSide::Start => self.start = offset,
            ActiveSide::End => self.end = offset,
        }
    }

    /// Collapse to a caret at `offset`, active on the end side.
    pub fn collapse_to(&mut self, offset: usize) {
        *self = Self::caret(offset);
    }

    /// Restore `start <= end <= text.len()` with both ends on character
    /// boundaries. Swapping the ends also flips the active side so the same
    /// offset keeps moving.
    pub fn normalize(&mut self, text: &str) {
        self.start = floor_char_boundary(text, self.start);
        self.end = floor_char_boundary(text, self.end);
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
            self.active = self.active.flipped();
        }
    }

    /// Map both ends through an edit that replaced `old` with `new_len` bytes.
    ///
    /// Ends before the edit stay, ends at or past its old end shift by the
    /// length difference, and ends inside it are clamped to the end of the
    /// new text.
    pub fn adjust_for_replace(&mut self, old: std::ops::Range<usize>, new_len: usize) {
        let map = |offset: usize| {
            if offset < old.start {
                offset
            } else if offset >= old.end {
                offset - old.end + old.start + new_len
            } else {
                offset.min(old.start + new_len)
            }
        };
        self.start = map(self.start);
        self.end = map(self.end);
    }
}
