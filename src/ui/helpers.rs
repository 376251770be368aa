//! Shared rendering utilities.
//!
//! Everything here writes into a frame buffer rather than stdout, so a whole frame is
//! assembled first and flushed to the terminal in one write.

use std::io::{self, Write};

/// Moves the cursor to a 1-indexed `row` and `col`.
///
/// ```rust
/// use mlaunch::ui::helpers::position_cursor;
///
/// let mut frame = Vec::new();
/// position_cursor(&mut frame, 5, 1).unwrap();
/// assert_eq!(frame, b"\x1b[5;1H");
/// ```
pub fn position_cursor(out: &mut impl Write, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Pads `text` with spaces, or cuts it, so it is exactly `width` characters long.
///
/// Counts characters, not bytes, so multi-byte names are never split mid-character.
///
/// ```rust
/// use mlaunch::ui::helpers::fit_to_width;
///
/// assert_eq!(fit_to_width("abc", 5), "abc  ");
/// assert_eq!(fit_to_width("abcdef", 4), "abcd");
/// ```
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}

/// Cuts `text` to at most `width` characters without padding.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit_to_width("Ärger", 3), "Ärg");
        assert_eq!(fit_to_width("Ärger", 3).chars().count(), 3);
        assert_eq!(fit_to_width("", 2), "  ");
        assert_eq!(fit_to_width("x", 0), "");
    }

    #[test]
    fn truncate_never_pads() {
        assert_eq!(truncate("ab", 5), "ab");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
