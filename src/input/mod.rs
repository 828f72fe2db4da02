//! Input events fed to [`TextEngine::key`](crate::TextEngine::key).
//!
//! Hosts translate their own keyboard events into [`KeyEvent`]s; mouse input
//! goes through [`TextEngine::click`](crate::TextEngine::click) and
//! [`TextEngine::drag`](crate::TextEngine::drag) directly.

mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
