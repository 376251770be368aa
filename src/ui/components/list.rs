//! Application list rows.

use super::render_boxed_line;
use crate::ui::helpers::fit_to_width;
use crate::ui::layout::WindowLayout;
use crate::ui::style::Style;
use crate::ui::viewmodel::DisplayItem;
use std::io::{self, Write};

/// Prefix marking Flatpak entries.
const FLATPAK_MARKER: &str = "[F] ";

/// Prefix for native entries, keeping names aligned with Flatpak ones.
const NATIVE_MARKER: &str = "    ";

/// Draws every visible row, then blanks the rest of the list area.
///
/// Each row reads `[F] name` or `    name`, padded to the box width. The highlighted
/// row is drawn in reverse video.
pub fn render_list(out: &mut impl Write, items: &[DisplayItem], layout: &WindowLayout) -> io::Result<()> {
    let width = layout.text_width();
    let capacity = layout.visible_rows();

    for index in 0..capacity {
        let row = layout.list_row(index);
        if !layout.is_interior_row(row) {
            break;
        }

        match items.get(index) {
            Some(item) => render_list_row(out, item, layout, row, width)?,
            None => render_boxed_line(out, layout, row, |out| write!(out, "{}", " ".repeat(width)))?,
        }
    }
    Ok(())
}

fn render_list_row(
    out: &mut impl Write,
    item: &DisplayItem,
    layout: &WindowLayout,
    row: usize,
    width: usize,
) -> io::Result<()> {
    let marker = if item.is_flatpak { FLATPAK_MARKER } else { NATIVE_MARKER };
    let text = fit_to_width(&format!("{marker}{}", item.name), width);

    render_boxed_line(out, layout, row, |out| {
        if item.is_selected {
            write!(out, "{}{text}{}", Style::reverse(), Style::reset())
        } else {
            write!(out, "{text}")
        }
    })
}
