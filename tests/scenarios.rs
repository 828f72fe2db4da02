//! End-to-end editing scenarios on a monospace grid host.

mod common;

use common::{assert_invariants, grid_engine, setup_test_logging};
use pagedit::{KeyCode, KeyEvent};

#[test]
fn hello_world_wraps_before_second_word() {
    setup_test_logging();
    let mut engine = grid_engine("hello world", 5, 10);
    assert_eq!(engine.line_index().starts(), &[0, 6]);
    assert_eq!(engine.line_of(5), 0);
    assert_eq!(engine.line_of(6), 1);
    assert_invariants(&mut engine);
}

#[test]
fn empty_buffer_is_one_line() {
    setup_test_logging();
    let mut engine = grid_engine("", 5, 10);
    assert_eq!(engine.line_index().starts(), &[0]);
    engine.set_selection(0, 0);
    assert_eq!(engine.selection(), (0, 0));
    assert_eq!(engine.selected_text(), "");

    for code in [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down] {
        engine.key(KeyEvent::key(code));
        assert_eq!(engine.selection(), (0, 0));
    }
    engine.key(KeyEvent::key(KeyCode::Backspace));
    engine.key(KeyEvent::key(KeyCode::Delete));
    assert_eq!(engine.text(), "");
    assert_invariants(&mut engine);
}

#[test]
fn delete_inside_selection_shrinks_it() {
    setup_test_logging();
    let mut engine = grid_engine("0123456789", 20, 5);
    engine.set_selection(2, 5);
    engine.replace_text(3, 4, "");
    assert_eq!(engine.text(), "012456789");
    assert_eq!(engine.selection(), (2, 4));
    assert_eq!(engine.selected_text(), "24");
    assert_invariants(&mut engine);
}

#[test]
fn down_then_up_returns_to_column_across_ragged_lines() {
    setup_test_logging();
    let mut engine = grid_engine("abcdefgh\nab\nabcdefgh", 20, 5);
    engine.set_selection(6, 6);

    engine.key(KeyEvent::key(KeyCode::Down));
    assert_eq!(engine.selection(), (11, 11));
    engine.key(KeyEvent::key(KeyCode::Down));
    assert_eq!(engine.selection(), (18, 18));
    engine.key(KeyEvent::key(KeyCode::Up));
    assert_eq!(engine.selection(), (11, 11));
    engine.key(KeyEvent::key(KeyCode::Up));
    assert_eq!(engine.selection(), (6, 6));
    assert_invariants(&mut engine);
}

#[test]
fn down_then_up_across_wrapped_lines() {
    setup_test_logging();
    let mut engine = grid_engine("the quick brown fox", 10, 5);
    assert_eq!(engine.line_index().starts(), &[0, 10]);
    engine.set_selection(8, 8);
    engine.key(KeyEvent::key(KeyCode::Down));
    assert_eq!(engine.selection(), (18, 18));
    engine.key(KeyEvent::key(KeyCode::Up));
    assert_eq!(engine.selection(), (8, 8));
}

#[test]
fn long_word_is_split_into_nonempty_pieces() {
    setup_test_logging();
    let text = "abcdefghijklmnopqrstuvwxyz";
    let mut engine = grid_engine(text, 4, 10);
    let starts = engine.line_index().starts().to_vec();
    assert_eq!(starts, vec![0, 4, 8, 12, 16, 20, 24]);

    let mut ends = starts[1..].to_vec();
    ends.push(text.len());
    for (start, end) in starts.iter().zip(ends) {
        assert!(end > *start, "empty line at {start}");
        assert!(end - start <= 4);
    }
}

#[test]
fn zero_width_lays_out_one_character_per_line() {
    setup_test_logging();
    let mut engine = grid_engine("a漢b", 0, 10);
    assert_eq!(engine.line_index().starts(), &[0, 1, 4]);
}

#[test]
fn typing_session_keeps_layout_consistent() {
    setup_test_logging();
    let mut engine = grid_engine("", 12, 4);
    for c in "the quick brown fox jumps over the lazy dog".chars() {
        engine.key(KeyEvent::from(c));
        assert_invariants(&mut engine);
    }
    let typed = engine.text().to_string();
    assert_eq!(engine.line_index().starts(), common::fresh_starts(&typed, 12).as_slice());
    assert_eq!(engine.selection(), (typed.len(), typed.len()));
    // The caret's line was scrolled into the four-row viewport
    let last = engine.line_count() - 1;
    assert!(engine.visible_lines().contains(&last));
}

#[test]
fn host_side_edit_keeps_selection_inside_text() {
    setup_test_logging();
    let mut engine = grid_engine("hello world", 20, 5);
    engine.set_selection(3, 11);
    engine.host_mut().set_text("hi");
    assert_eq!(engine.selection(), (2, 2));
    assert_invariants(&mut engine);
    engine.key(KeyEvent::key(KeyCode::Left));
    assert_eq!(engine.selection(), (1, 1));
}
