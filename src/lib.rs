//! `pagedit` - headless wrapped-text editing core
//!
//! Paginates a host-owned buffer into display lines, tracks one selection,
//! and handles typing, arrow-key and mouse navigation, and scroll-reveal.
//! Everything outside the text model (fonts, windows, drawing) stays with the
//! host behind the [`TextHost`] trait.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Rows are clamped before casting
#![allow(clippy::cast_precision_loss)] // Line counts fit comfortably in f32
#![allow(clippy::module_name_repetitions)] // Allow text::TextEngine etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::float_cmp)] // Geometry compares values produced by the same arithmetic
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening

pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod input;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use geometry::{Point, Rect};
pub use host::{BufferHost, TextHost};

// Re-export input types
pub use input::{KeyCode, KeyEvent, KeyModifiers};

// Re-export commonly used types
pub use text::{
    ActiveSide, DrawOp, EditorOptions, LineIndex, Repagination, RepaginateMode, ScrollRequest,
    Selection, TextEngine,
};
pub use unicode::WidthMethod;
