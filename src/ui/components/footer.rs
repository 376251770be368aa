//! Bottom border with keybinding hints.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::layout::WindowLayout;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Draws the bottom border with the help text set into it, cut to fit narrow boxes.
pub fn render_footer(out: &mut impl Write, footer: &FooterInfo, layout: &WindowLayout) -> io::Result<()> {
    let inner = layout.width.saturating_sub(2);
    let help = truncate(&footer.keybindings, inner.saturating_sub(1));
    let help_len = help.chars().count();

    position_cursor(out, layout.bottom(), layout.left)?;
    write!(out, "└")?;
    if inner > 0 {
        write!(out, "─{help}")?;
        write!(out, "{}", "─".repeat(inner.saturating_sub(1 + help_len)))?;
    }
    write!(out, "┘")
}
