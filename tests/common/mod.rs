#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a subset of the helpers

use pagedit::unicode::floor_char_boundary;
use pagedit::{BufferHost, EditorOptions, LogLevel, RepaginateMode, TextEngine, set_log_callback};
use std::sync::Once;

/// Install a tracing test writer and route the crate's log callback into it.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "pagedit", "{message}"),
            LogLevel::Info => tracing::info!(target: "pagedit", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "pagedit", "{message}"),
            LogLevel::Error => tracing::error!(target: "pagedit", "{message}"),
        });
    });
}

/// Engine over a monospace grid `columns` cells wide and `rows` lines tall.
pub fn grid_engine(text: &str, columns: u32, rows: u32) -> TextEngine<BufferHost> {
    TextEngine::new(BufferHost::with_grid(text, columns, rows))
}

/// Same as [`grid_engine`] but every edit re-lays out the whole document.
pub fn full_mode_engine(text: &str, columns: u32, rows: u32) -> TextEngine<BufferHost> {
    let options = EditorOptions::default().with_repaginate(RepaginateMode::Full);
    TextEngine::with_options(BufferHost::with_grid(text, columns, rows), options)
        .expect("default-derived options are valid")
}

/// Line starts of `text` laid out from scratch at `columns`.
pub fn fresh_starts(text: &str, columns: u32) -> Vec<usize> {
    grid_engine(text, columns, 10).line_index().starts().to_vec()
}

/// Check every structural invariant the engine promises after a public call.
pub fn assert_invariants(engine: &mut TextEngine<BufferHost>) {
    let len = engine.text().len();
    let (start, end) = engine.selection();
    assert!(start <= end, "selection out of order: {start}..{end}");
    assert!(end <= len, "selection end {end} past text length {len}");
    assert_eq!(floor_char_boundary(engine.text(), start), start);
    assert_eq!(floor_char_boundary(engine.text(), end), end);

    let index = engine.line_index().clone();
    assert!(
        index.is_valid_for(len),
        "invalid line index {:?} for length {len}",
        index.starts()
    );
    let text = engine.text();
    for &line_start in index.starts() {
        assert!(text.is_char_boundary(line_start));
    }
}
