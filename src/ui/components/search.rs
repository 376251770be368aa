//! Search line and the separator below it.

use super::render_boxed_line;
use crate::ui::helpers::{fit_to_width, position_cursor};
use crate::ui::layout::WindowLayout;
use crate::ui::style::Style;
use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

/// Label in front of the query text.
const SEARCH_LABEL: &str = "Search: ";

/// Draws the search line and the separator under it.
///
/// # Layout
///
/// ```text
/// │ Search: fire_               │
/// ├─────────────────────────────┤
/// ```
///
/// The `_` indicator blinks and is only drawn while the query is non-empty. Lines
/// that would fall on or below the bottom border are skipped.
pub fn render_search_bar(
    out: &mut impl Write,
    search: &SearchBarInfo,
    layout: &WindowLayout,
) -> io::Result<()> {
    let row = layout.top + 1;
    let width = layout.text_width();
    let text = format!("{SEARCH_LABEL}{}", search.query);
    let text_len = text.chars().count();

    render_boxed_line(out, layout, row, |out| {
        if search.show_cursor && text_len < width {
            write!(out, "{text}")?;
            write!(out, "{}_{}", Style::blink(), Style::reset())?;
            write!(out, "{}", " ".repeat(width - text_len - 1))
        } else {
            write!(out, "{}", fit_to_width(&text, width))
        }
    })?;

    if !layout.is_interior_row(row + 1) || layout.width < 2 {
        return Ok(());
    }
    position_cursor(out, row + 1, layout.left)?;
    write!(out, "├{}┤", "─".repeat(layout.width - 2))
}
