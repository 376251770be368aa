//! Composable UI component renderers.
//!
//! Each component draws one part of the launcher box into the frame buffer.
//!
//! # Components
//!
//! - [`header`]: Top border with title and counts
//! - [`search`]: Search line and separator
//! - [`list`]: Application rows with highlight
//! - [`empty`]: "No matches" message
//! - [`footer`]: Bottom border with keybinding hints
//!
//! # Layout
//!
//! ```text
//! ┌─ m (2/3) ────────────────┐
//! │ Search: fi_              │
//! ├──────────────────────────┤
//! │     Files                │
//! │     Firefox              │
//! │                          │
//! └─ UP/DOWN:Navigate ... ───┘
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::WindowLayout;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_bar;

/// Narrowest box that still has room for both borders and margins.
const MIN_BOXED_WIDTH: usize = 4;

/// Draws one interior line of the box: left border, a margin cell, the content
/// written by `content`, a margin cell, right border.
///
/// `content` must write exactly `layout.text_width()` visible cells. Nothing is
/// written when `row` is not strictly between the borders or the box is too narrow
/// for the frame.
fn render_boxed_line<W, F>(out: &mut W, layout: &WindowLayout, row: usize, content: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    if !layout.is_interior_row(row) || layout.width < MIN_BOXED_WIDTH {
        return Ok(());
    }
    position_cursor(out, row, layout.left)?;
    write!(out, "│ ")?;
    content(out)?;
    write!(out, " │")
}

/// Draws the complete launcher box for `vm`.
pub fn render_window(out: &mut impl Write, vm: &UIViewModel, layout: &WindowLayout) -> io::Result<()> {
    render_header(out, &vm.header, layout)?;
    render_search_bar(out, &vm.search_bar, layout)?;
    render_list(out, &vm.display_items, layout)?;
    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, layout)?;
    }
    render_footer(out, &vm.footer, layout)
}
