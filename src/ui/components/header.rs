//! Top border with the title.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::layout::WindowLayout;
use crate::ui::style::Style;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Draws the top border of the box with the title set into it two cells from the
/// left corner.
///
/// ```text
/// ┌─ m (12/240) ──────────────┐
/// ```
pub fn render_header(out: &mut impl Write, header: &HeaderInfo, layout: &WindowLayout) -> io::Result<()> {
    let inner = layout.width.saturating_sub(2);
    let title = truncate(&header.title, inner.saturating_sub(1));
    let title_len = title.chars().count();

    position_cursor(out, layout.top, layout.left)?;
    write!(out, "┌")?;
    if inner > 0 {
        write!(out, "─")?;
        write!(out, "{}{title}{}", Style::bold(), Style::reset())?;
        write!(out, "{}", "─".repeat(inner.saturating_sub(1 + title_len)))?;
    }
    write!(out, "┐")
}
