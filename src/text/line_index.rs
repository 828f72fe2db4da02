//! Table of display-line start offsets.

use std::ops::Range;

/// Ordered byte offsets at which display lines start.
///
/// Always non-empty, strictly increasing, and `starts[0] == 0`. Line `i`
/// spans `starts[i]..starts[i + 1]`; the last line runs to the end of the
/// text. Only pagination rebuilds the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self { starts: vec![0] }
    }
}

impl LineIndex {
    /// Number of display lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The raw start offsets.
    #[must_use]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// First byte of `line`; past the last line this is `total`.
    #[must_use]
    pub fn line_start(&self, line: usize, total: usize) -> usize {
        self.starts.get(line).copied().unwrap_or(total)
    }

    /// One past the last byte of `line`: the next line's start, or `total`.
    #[must_use]
    pub fn line_end(&self, line: usize, total: usize) -> usize {
        self.line_start(line + 1, total)
    }

    /// Byte range of `line`.
    #[must_use]
    pub fn line_range(&self, line: usize, total: usize) -> Range<usize> {
        self.line_start(line, total)..self.line_end(line, total)
    }

    /// Index of the last line.
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.starts.len() - 1
    }

    /// Line containing `offset`. An offset equal to a line start belongs to
    /// that line; offsets past the end belong to the last line.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    pub(crate) fn starts_mut(&mut self) -> &mut Vec<usize> {
        &mut self.starts
    }

    /// Rewrite the table for an edit that replaced `old` with `new_len` bytes.
    ///
    /// Starts strictly inside the replaced span (and at its first byte, whose
    /// following text changed) are dropped. Starts at or after the span's end
    /// shift by the length difference, so the suffix past the edit lines up
    /// with the new text and repagination can stop when it meets it.
    pub(crate) fn splice(&mut self, old: Range<usize>, new_len: usize) {
        let removed = old.end - old.start;
        let mut kept: Vec<usize> = Vec::with_capacity(self.starts.len());
        for &start in &self.starts {
            let mapped = if start == 0 || start < old.start {
                start
            } else if start >= old.end {
                start - removed + new_len
            } else {
                continue;
            };
            if kept.last().is_none_or(|&last| mapped > last) {
                kept.push(mapped);
            }
        }
        self.starts = kept;
    }

    /// Check the structural invariants.
    #[must_use]
    pub fn is_valid_for(&self, total: usize) -> bool {
        self.starts.first() == Some(&0)
            && self.starts.windows(2).all(|pair| pair[0] < pair[1])
            && self.starts.last().is_some_and(|&last| last <= total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(starts: &[usize]) -> LineIndex {
        LineIndex {
            starts: starts.to_vec(),
        }
    }

    #[test]
    fn test_default_is_one_empty_line() {
        let idx = LineIndex::default();
        assert_eq!(idx.starts(), &[0]);
        assert_eq!(idx.line_count(), 1);
        assert_eq!(idx.line_range(0, 0), 0..0);
        assert!(idx.is_valid_for(0));
    }

    #[test]
    fn test_line_bounds() {
        let idx = index(&[0, 6, 12]);
        assert_eq!(idx.line_start(1, 20), 6);
        assert_eq!(idx.line_end(1, 20), 12);
        assert_eq!(idx.line_end(2, 20), 20);
        assert_eq!(idx.line_start(7, 20), 20);
        assert_eq!(idx.last_line(), 2);
    }

    #[test]
    fn test_line_of() {
        let idx = index(&[0, 6, 12]);
        assert_eq!(idx.line_of(0), 0);
        assert_eq!(idx.line_of(5), 0);
        assert_eq!(idx.line_of(6), 1);
        assert_eq!(idx.line_of(11), 1);
        assert_eq!(idx.line_of(12), 2);
        assert_eq!(idx.line_of(999), 2);
    }

    #[test]
    fn test_splice_shifts_after_insert() {
        let mut idx = index(&[0, 6, 12]);
        idx.splice(2..2, 3);
        assert_eq!(idx.starts(), &[0, 9, 15]);
    }

    #[test]
    fn test_splice_insert_at_line_start_moves_that_line() {
        let mut idx = index(&[0, 6, 12]);
        idx.splice(6..6, 2);
        assert_eq!(idx.starts(), &[0, 8, 14]);
    }

    #[test]
    fn test_splice_drops_starts_inside_deletion() {
        let mut idx = index(&[0, 6, 12, 18]);
        idx.splice(4..13, 0);
        assert_eq!(idx.starts(), &[0, 9]);
    }

    #[test]
    fn test_splice_delete_ending_at_line_start() {
        let mut idx = index(&[0, 6, 12]);
        idx.splice(3..6, 0);
        assert_eq!(idx.starts(), &[0, 3, 9]);
    }

    #[test]
    fn test_splice_delete_from_zero_keeps_first_line() {
        let mut idx = index(&[0, 6, 12]);
        idx.splice(0..6, 0);
        assert_eq!(idx.starts(), &[0, 6]);
        assert!(idx.is_valid_for(6));
    }

    #[test]
    fn test_splice_replace_drops_start_at_edit_begin() {
        let mut idx = index(&[0, 6, 12]);
        idx.splice(6..8, 5);
        assert_eq!(idx.starts(), &[0, 15]);
    }

    #[test]
    fn test_is_valid_for_rejects_bad_tables() {
        assert!(!index(&[1, 4]).is_valid_for(10));
        assert!(!index(&[0, 4, 4]).is_valid_for(10));
        assert!(!index(&[0, 11]).is_valid_for(10));
        assert!(index(&[0, 10]).is_valid_for(10));
    }
}
