//! Cell widths for monospace measurement.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the cell width of a character using a specific method.
///
/// Control characters, including line terminators, are zero width.
#[inline]
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    // Fast path: ASCII printable characters are always width 1
    if (' '..='~').contains(&c) {
        return 1;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Count the cells a string occupies, with tabs taking `tab_cells` each.
///
/// Tabs are a fixed width rather than aligned to tab stops: substrings are
/// measured without knowing the column they start at.
#[must_use]
pub fn cell_count(s: &str, method: WidthMethod, tab_cells: usize) -> usize {
    s.chars()
        .map(|c| {
            if c == '\t' {
                tab_cells
            } else {
                display_width_char_with_method(c, method)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(cell_count("hello", WidthMethod::WcWidth, 4), 5);
        assert_eq!(display_width_char_with_method('a', WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(cell_count("漢字", WidthMethod::WcWidth, 4), 4);
        assert_eq!(display_width_char_with_method('漢', WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_control_and_combining_are_zero_width() {
        assert_eq!(display_width_char_with_method('\n', WidthMethod::WcWidth), 0);
        assert_eq!(display_width_char_with_method('\r', WidthMethod::WcWidth), 0);
        assert_eq!(cell_count("e\u{0301}", WidthMethod::WcWidth, 4), 1);
    }

    #[test]
    fn test_tab_cells() {
        assert_eq!(cell_count("a\tb", WidthMethod::WcWidth, 4), 6);
        assert_eq!(cell_count("\t\t", WidthMethod::WcWidth, 2), 4);
    }

    #[test]
    fn test_width_methods() {
        // Ambiguous width character: circled digit one (U+2460)
        let ch = '①';
        assert_eq!(display_width_char_with_method(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char_with_method(ch, WidthMethod::Unicode), 2);
    }
}
