//! Unicode utilities for boundary stepping and cell widths.

mod grapheme;
mod width;

pub use grapheme::{
    floor_char_boundary, grapheme_indices, is_inline_whitespace, is_line_terminator,
    next_grapheme_boundary, prev_grapheme_boundary, terminator_len_at, trim_line_terminator,
};
pub use width::{WidthMethod, cell_count, display_width_char_with_method};
