//! Fuzz target for single-line measurement.
//!
//! `compute_line_length` must always land on a character boundary, consume
//! something from non-empty input, and never run past the text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagedit::text::compute_line_length;
use pagedit::BufferHost;

fuzz_target!(|input: (String, i8)| {
    let (text, width) = input;
    let host = BufferHost::with_grid("", 1, 1);
    let consumed = compute_line_length(&host, &text, f32::from(width));
    assert!(consumed <= text.len());
    assert!(text.is_char_boundary(consumed));
    assert_eq!(consumed == 0, text.is_empty());
});
