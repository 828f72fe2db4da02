//! Error types for pagedit.
//!
//! Editing operations on [`TextEngine`](crate::TextEngine) are total: offsets
//! are clamped and degenerate geometry is handled in place. Errors only come
//! from validating configuration and from direct host-side edits.

use std::fmt;

/// Result type alias for pagedit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pagedit operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A metric (line height, cell width, margin) is not usable.
    InvalidMetric { name: &'static str, value: f32 },
    /// A byte range does not fit the buffer or is reversed.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A byte offset falls inside a UTF-8 sequence.
    NotCharBoundary { offset: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMetric { name, value } => {
                write!(f, "invalid {name}: {value}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "range {start}..{end} is invalid for buffer of {len} bytes")
            }
            Self::NotCharBoundary { offset } => {
                write!(f, "offset {offset} is not on a character boundary")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Check that a metric is finite and strictly positive.
pub(crate) fn positive_metric(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidMetric { name, value })
    }
}
