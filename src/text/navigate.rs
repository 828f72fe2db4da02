//! Keyboard navigation and typing.
//!
//! Vertical moves keep a horizontal gap: the first Up or Down of a run
//! measures the caret's distance from its line start, and later moves in the
//! same run fit that distance on each target line, so the caret comes back to
//! its column after passing through shorter lines. Any other operation
//! forgets the gap.

use crate::host::TextHost;
use crate::input::{KeyCode, KeyEvent};
use crate::text::TextEngine;

impl<H: TextHost> TextEngine<H> {
    /// Apply one key press. `SHIFT` extends the selection.
    ///
    /// Characters typed with `CTRL` or `ALT` held are ignored; hosts map
    /// those to commands of their own.
    pub fn key(&mut self, event: KeyEvent) {
        if event.code.is_char() && event.is_shortcut() {
            return;
        }
        self.ensure_paginated();
        if !event.code.is_vertical() {
            self.gap = None;
        }
        let extend = event.shift();
        match event.code {
            KeyCode::Left => self.move_horizontal(-1, extend),
            KeyCode::Right => self.move_horizontal(1, extend),
            KeyCode::Up => self.move_vertical(-1, extend),
            KeyCode::Down => self.move_vertical(1, extend),
            KeyCode::Home => self.move_to_line_edge(false, extend),
            KeyCode::End => self.move_to_line_edge(true, extend),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Enter => self.replace_selection("\n"),
            KeyCode::Tab => self.replace_selection("\t"),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.replace_selection(c.encode_utf8(&mut buf));
            }
        }
        self.finish_navigation();
    }

    /// Replace the selection with `text`, leaving the caret after it.
    pub fn insert_text(&mut self, text: &str) {
        self.ensure_paginated();
        self.replace_selection(text);
        self.finish_navigation();
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.selection();
        self.replace_text(start, end, text);
        self.selection.collapse_to(start + text.len());
    }

    fn finish_navigation(&mut self) {
        self.normalize_selection();
        if self.options.auto_reveal {
            self.reveal_selection();
        }
    }

    fn move_horizontal(&mut self, direction: isize, extend: bool) {
        let text = self.host.text();
        let sel = &mut self.selection;
        if extend {
            let moved = self
                .host
                .step_boundaries(text, sel.active_offset(), direction);
            sel.set_active_offset(moved);
        } else if sel.is_empty() {
            let moved = self.host.step_boundaries(text, sel.end, direction);
            sel.collapse_to(moved);
        } else if direction < 0 {
            sel.collapse_to(sel.start);
        } else {
            sel.collapse_to(sel.end);
        }
    }

    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let sel = self.selection;
        if extend {
            let target = self.vertical_target(sel.active_offset(), delta);
            self.selection.set_active_offset(target);
        } else if sel.is_empty() {
            let target = self.vertical_target(sel.end, delta);
            self.selection.collapse_to(target);
        } else if delta < 0 {
            // A selection only collapses; the caret stays on its line.
            self.selection.collapse_to(sel.start);
        } else {
            self.selection.collapse_to(sel.end);
        }
    }

    /// Offset `delta` lines away from `from`, at the remembered gap.
    fn vertical_target(&mut self, from: usize, delta: isize) -> usize {
        let text = self.host.text();
        let len = text.len();
        let line = self.lines.line_of(from);

        let gap = match self.gap {
            Some(gap) => gap,
            None => {
                let line_start = self.lines.line_start(line, len).min(from);
                let gap = self.host.measure(&text[line_start..from]);
                self.gap = Some(gap);
                gap
            }
        };

        let Some(target_line) = line.checked_add_signed(delta) else {
            return 0;
        };
        if target_line > self.lines.last_line() {
            return len;
        }
        let range = self.lines.line_range(target_line, len);
        let fitted = range.start + self.host.fit_forward(&text[range], gap);
        fitted.min(self.last_position(target_line))
    }

    fn move_to_line_edge(&mut self, to_end: bool, extend: bool) {
        let from = self.selection.active_offset();
        let line = self.lines.line_of(from);
        let target = if to_end {
            self.last_position(line)
        } else {
            self.lines.line_start(line, self.host.text().len())
        };
        if extend {
            self.selection.set_active_offset(target);
        } else {
            self.selection.collapse_to(target);
        }
    }

    fn delete_backward(&mut self) {
        let (start, end) = self.selection();
        if start != end {
            self.replace_text(start, end, "");
        } else if end > 0 {
            let prev = self.host.prev_boundary(self.host.text(), end);
            self.replace_text(prev, end, "");
        }
    }

    fn delete_forward(&mut self) {
        let (start, end) = self.selection();
        if start != end {
            self.replace_text(start, end, "");
        } else {
            let next = self.host.next_boundary(self.host.text(), end);
            if next > end {
                self.replace_text(end, next, "");
            }
        }
    }
}
