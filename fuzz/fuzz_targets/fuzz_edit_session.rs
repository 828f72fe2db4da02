//! Fuzz target for editing sessions.
//!
//! Drives arbitrary key presses, clicks and replacements through an engine
//! over a grid host and checks the layout and selection invariants after
//! every step. Incremental layout must also match a fresh one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagedit::{BufferHost, KeyCode, KeyEvent, KeyModifiers, TextEngine};

#[derive(Arbitrary, Debug)]
struct Session {
    text: String,
    columns: u8,
    rows: u8,
    steps: Vec<Step>,
}

#[derive(Arbitrary, Debug)]
enum Step {
    Key { code: Key, shift: bool, ctrl: bool },
    Click { x: i16, y: i16, extend: bool },
    Drag { x: i16, y: i16 },
    Replace { a: u16, b: u16, text: String },
    Select { a: u16, b: u16 },
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Tab,
    Char(char),
}

impl Key {
    fn code(self) -> KeyCode {
        match self {
            Self::Left => KeyCode::Left,
            Self::Right => KeyCode::Right,
            Self::Up => KeyCode::Up,
            Self::Down => KeyCode::Down,
            Self::Home => KeyCode::Home,
            Self::End => KeyCode::End,
            Self::Backspace => KeyCode::Backspace,
            Self::Delete => KeyCode::Delete,
            Self::Enter => KeyCode::Enter,
            Self::Tab => KeyCode::Tab,
            Self::Char(c) => KeyCode::Char(c),
        }
    }
}

fn check(engine: &mut TextEngine<BufferHost>, columns: u32) {
    let len = engine.text().len();
    let (start, end) = engine.selection();
    assert!(start <= end && end <= len);
    assert!(engine.text().is_char_boundary(start));
    assert!(engine.text().is_char_boundary(end));

    let index = engine.line_index().clone();
    assert!(index.is_valid_for(len));

    let text = engine.text().to_string();
    let mut fresh = TextEngine::new(BufferHost::with_grid(&text, columns, 4));
    assert_eq!(fresh.line_index(), &index);
}

fuzz_target!(|session: Session| {
    // Keep individual runs fast
    if session.text.len() > 2_000 || session.steps.len() > 64 {
        return;
    }
    let columns = u32::from(session.columns % 40);
    let rows = u32::from(session.rows % 10) + 1;
    let mut engine = TextEngine::new(BufferHost::with_grid(&session.text, columns, rows));

    for step in session.steps {
        match step {
            Step::Key { code, shift, ctrl } => {
                let mut modifiers = KeyModifiers::empty();
                modifiers.set(KeyModifiers::SHIFT, shift);
                modifiers.set(KeyModifiers::CTRL, ctrl);
                engine.key(KeyEvent::new(code.code(), modifiers));
            }
            Step::Click { x, y, extend } => {
                engine.click(f32::from(x) / 4.0, f32::from(y) / 4.0, extend);
            }
            Step::Drag { x, y } => engine.drag(f32::from(x) / 4.0, f32::from(y) / 4.0),
            Step::Replace { a, b, text } => {
                if text.len() <= 64 {
                    engine.replace_text(usize::from(a), usize::from(b), &text);
                }
            }
            Step::Select { a, b } => engine.set_selection(usize::from(a), usize::from(b)),
        }
        check(&mut engine, columns);
    }
});
