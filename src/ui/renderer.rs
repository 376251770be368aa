//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: scroll the session so the highlight is visible and
//!    compute the `UIViewModel` for the box's list capacity
//! 2. **Component Rendering**: clear the screen and draw the box into a frame buffer
//!
//! # Example
//!
//! ```rust
//! use mlaunch::app::SessionState;
//! use mlaunch::domain::Catalog;
//! use mlaunch::ui::render;
//! use mlaunch::Config;
//!
//! let catalog = Catalog::default();
//! let mut state = SessionState::new(&catalog);
//! let frame = render(&mut state, 24, 80, &Config::default()).unwrap();
//! assert!(!frame.is_empty());
//! ```

use crate::app::SessionState;
use crate::ui::components;
use crate::ui::layout::WindowLayout;
use crate::ui::style::Style;
use crate::ui::viewmodel::UIViewModel;
use crate::Config;
use std::io::{self, Write};

/// Renders one frame of the session for a `rows` × `cols` terminal.
///
/// Adjusts the session's scroll offset first, so the returned frame always shows the
/// highlighted row.
///
/// # Errors
///
/// Only fails if writing into the buffer fails, which an in-memory buffer never does.
pub fn render(state: &mut SessionState<'_>, rows: usize, cols: usize, config: &Config) -> io::Result<Vec<u8>> {
    let layout = WindowLayout::compute(rows, cols, config);
    let capacity = layout.visible_rows();

    state.scroll_into_view(capacity);
    let viewmodel = state.compute_viewmodel(capacity);

    let mut frame = Vec::with_capacity(rows * cols);
    render_viewmodel(&mut frame, &viewmodel, &layout)?;
    Ok(frame)
}

/// Clears the screen and draws `vm` inside `layout`.
pub fn render_viewmodel(out: &mut impl Write, vm: &UIViewModel, layout: &WindowLayout) -> io::Result<()> {
    write!(out, "{}", Style::clear_screen())?;
    components::render_window(out, vm, layout)
}
