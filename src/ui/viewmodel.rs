//! View model types representing renderable UI state.
//!
//! View models are created by `SessionState::compute_viewmodel()` and consumed by the
//! renderer. They carry no behaviour, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use mlaunch::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "Firefox".to_string(),
//!         is_flatpak: false,
//!         is_selected: true,
//!     }],
//!     selected_index: Some(0),
//!     header: HeaderInfo { title: " m (1/3) ".to_string() },
//!     search_bar: SearchBarInfo { query: "fire".to_string(), show_cursor: true },
//!     footer: FooterInfo { keybindings: " ESC/q:Quit ".to_string() },
//!     empty_state: None,
//!     window: 0..1,
//! };
//! assert_eq!(vm.display_items.len(), vm.window.len());
//! ```

use std::ops::Range;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows inside the visible window, top to bottom.
    pub display_items: Vec<DisplayItem>,

    /// Position of the highlighted row within `display_items`, if any row is shown.
    pub selected_index: Option<usize>,

    /// Title drawn into the top border.
    pub header: HeaderInfo,

    /// The search line.
    pub search_bar: SearchBarInfo,

    /// Help text drawn into the bottom border.
    pub footer: FooterInfo,

    /// Shown in place of the list when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Range of filtered positions covered by `display_items`.
    pub window: Range<usize>,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Application display name.
    pub name: String,

    /// Drawn with a `[F]` marker when set.
    pub is_flatpak: bool,

    /// Drawn in reverse video when set.
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message displayed when the filtered list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Search line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether to draw the blinking cursor indicator after the query.
    ///
    /// Only set while the query is non-empty.
    pub show_cursor: bool,
}
