//! ANSI escape sequences for the fixed launcher look.
//!
//! The launcher draws with terminal attributes only (no colors), so it reads the same
//! on any palette.
//!
//! ```rust
//! use mlaunch::ui::style::Style;
//!
//! let text = format!("{}selected{}", Style::reverse(), Style::reset());
//! assert!(text.starts_with("\u{1b}[7m"));
//! ```

/// Namespace for SGR attribute sequences.
#[derive(Debug, Clone, Copy)]
pub struct Style;

impl Style {
    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI blink escape sequence (`\x1b[5m`).
    ///
    /// Used for the cursor indicator after a non-empty query.
    #[must_use]
    pub const fn blink() -> &'static str {
        "\u{001b}[5m"
    }

    /// Returns the ANSI reverse video escape sequence (`\x1b[7m`).
    ///
    /// Used for the highlighted row.
    #[must_use]
    pub const fn reverse() -> &'static str {
        "\u{001b}[7m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Clears the whole screen.
    #[must_use]
    pub const fn clear_screen() -> &'static str {
        "\u{001b}[2J"
    }
}
