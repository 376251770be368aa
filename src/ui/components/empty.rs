//! Empty state message.

use super::render_boxed_line;
use crate::ui::helpers::truncate;
use crate::ui::layout::WindowLayout;
use crate::ui::style::Style;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Draws the message centered on the first list row, dimmed.
///
/// Only the first row is written; the caller blanks the list area beforehand.
pub fn render_empty_state(out: &mut impl Write, empty: &EmptyState, layout: &WindowLayout) -> io::Result<()> {
    let row = layout.list_row(0);
    let width = layout.text_width();
    let message = truncate(&empty.message, width);
    let msg_len = message.chars().count();
    let padding = width.saturating_sub(msg_len) / 2;

    render_boxed_line(out, layout, row, |out| {
        write!(out, "{}", " ".repeat(padding))?;
        write!(out, "{}{message}{}", Style::dim(), Style::reset())?;
        write!(out, "{}", " ".repeat(width.saturating_sub(padding + msg_len)))
    })
}
