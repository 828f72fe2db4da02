//! Wrapped-line layout and editing over a host-owned buffer.
//!
//! Key types:
//!
//! - [`TextEngine`]: the editor handle; owns a [`TextHost`](crate::TextHost)
//! - [`LineIndex`]: start offsets of display lines
//! - [`Selection`]: ordered range plus the [`ActiveSide`] that moves
//! - [`DrawOp`]: what the drawing pass asks the host to paint
//!
//! # Examples
//!
//! ## Wrapping and typing
//!
//! ```
//! use pagedit::{BufferHost, KeyCode, KeyEvent, TextEngine};
//!
//! let mut engine = TextEngine::new(BufferHost::with_grid("one two three", 8, 4));
//! assert_eq!(engine.line_index().starts(), &[0, 8]);
//!
//! engine.key(KeyEvent::key(KeyCode::End));
//! engine.key(KeyEvent::key(KeyCode::Backspace));
//! assert_eq!(engine.text(), "one tw three");
//! ```
//!
//! ## Mouse selection
//!
//! ```
//! use pagedit::{BufferHost, TextEngine};
//!
//! let mut engine = TextEngine::new(BufferHost::with_grid("hello world", 20, 4));
//! engine.click(0.0, -0.5, false);
//! engine.drag(5.0, -0.5);
//! assert_eq!(engine.selected_text(), "hello");
//! ```

mod edit;
mod engine;
mod hit;
mod line_index;
mod navigate;
pub mod paginate;
mod render;
mod selection;

pub use engine::{EditorOptions, TextEngine};
pub use hit::ScrollRequest;
pub use line_index::LineIndex;
pub use paginate::{Repagination, RepaginateMode, compute_line_length};
pub use render::DrawOp;
pub use selection::{ActiveSide, Selection};
