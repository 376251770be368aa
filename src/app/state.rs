//! Session state management and view model computation.
//!
//! This module defines [`SessionState`], the single source of truth for one picker
//! session: the query, the filtered index list derived from it, the highlighted
//! position, and the scroll offset of the visible window.
//!
//! # State Components
//!
//! - **Catalog**: borrowed, read-only list of every discovered application
//! - **Query**: bounded text typed by the user
//! - **Filtered**: catalog indices matching the query, in catalog order
//! - **Highlight**: position within `filtered` of the row that Enter would launch
//! - **Offset**: first filtered position shown in the visible window
//!
//! # Example
//!
//! ```rust
//! use mlaunch::app::SessionState;
//! use mlaunch::domain::{AppEntry, Catalog, SourceKind};
//!
//! let catalog = Catalog::new(vec![
//!     AppEntry::from_file_name("firefox.desktop", SourceKind::Native).unwrap(),
//! ]);
//! let mut state = SessionState::new(&catalog);
//! state.scroll_into_view(10);
//! let viewmodel = state.compute_viewmodel(10);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::query::Query;
use super::viewport;
use crate::domain::Catalog;
use crate::search;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// Number of rows PageUp/PageDown move the highlight.
pub const PAGE_SIZE: usize = 5;

/// Help text drawn into the bottom border.
const KEYBINDINGS: &str = " UP/DOWN:Navigate Enter:Start ESC/q:Quit ";

/// State of one running picker session.
///
/// Mutated by the event handler; rendered through [`SessionState::compute_viewmodel`].
#[derive(Debug, Clone)]
pub struct SessionState<'a> {
    catalog: &'a Catalog,

    /// Text typed so far. Changed only through [`SessionState::push_char`] and
    /// [`SessionState::pop_char`], which keep `filtered` in sync.
    query: Query,

    /// Catalog indices matching `query`, in catalog order.
    filtered: Vec<usize>,

    /// Position within `filtered` of the highlighted row.
    ///
    /// Always `< filtered.len()` when `filtered` is non-empty, 0 otherwise.
    pub(crate) highlight: usize,

    /// First position within `filtered` shown in the visible window.
    pub(crate) offset: usize,
}

impl<'a> SessionState<'a> {
    /// Starts a session over `catalog` with an empty query, every entry visible, and
    /// the first row highlighted.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            query: Query::new(),
            filtered: (0..catalog.len()).collect(),
            highlight: 0,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Catalog indices currently matching the query.
    #[must_use]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    #[must_use]
    pub const fn highlight(&self) -> usize {
        self.highlight
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the highlight one row up. Returns `false` when already at the top.
    pub fn move_up(&mut self) -> bool {
        if self.highlight == 0 {
            return false;
        }
        self.highlight -= 1;
        true
    }

    /// Moves the highlight one row down. Returns `false` when already at the bottom.
    pub fn move_down(&mut self) -> bool {
        if self.highlight + 1 >= self.filtered.len() {
            return false;
        }
        self.highlight += 1;
        true
    }

    /// Moves the highlight [`PAGE_SIZE`] rows down, stopping at the last row.
    pub fn page_down(&mut self) -> bool {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            return false;
        };
        let target = (self.highlight + PAGE_SIZE).min(last);
        let moved = target != self.highlight;
        self.highlight = target;
        moved
    }

    /// Moves the highlight [`PAGE_SIZE`] rows up, stopping at the first row.
    pub fn page_up(&mut self) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        let target = self.highlight.saturating_sub(PAGE_SIZE);
        let moved = target != self.highlight;
        self.highlight = target;
        moved
    }

    /// Appends `c` to the query and refilters. Returns `false` when the character was
    /// rejected (non-printable or query full), in which case nothing changes.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.query.push(c) {
            return false;
        }
        tracing::trace!(query = %self.query, char = %c, "search query updated");
        self.apply_search_filter();
        true
    }

    /// Removes the last query character and refilters. Returns `false` when the query
    /// was already empty, in which case nothing changes.
    pub fn pop_char(&mut self) -> bool {
        if !self.query.pop() {
            return false;
        }
        tracing::trace!(query = %self.query, "search query shortened");
        self.apply_search_filter();
        true
    }

    /// Recomputes `filtered` from scratch and returns to the top of the new list.
    ///
    /// Row positions mean different entries after refiltering, so the highlight and
    /// the scroll offset are both reset to 0.
    fn apply_search_filter(&mut self) {
        self.filtered = search::rebuild(self.catalog, self.query.as_str());
        self.highlight = 0;
        self.offset = 0;
    }

    /// Catalog index of the highlighted entry, or `None` when nothing matches.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.filtered.get(self.highlight).copied()
    }

    /// Scrolls the window of `capacity` rows so the highlight is visible.
    ///
    /// Called once per frame, before [`SessionState::compute_viewmodel`].
    pub fn scroll_into_view(&mut self, capacity: usize) {
        self.offset = viewport::adjust(self.offset, self.highlight, capacity);
    }

    /// Computes the view model for a window of `capacity` rows starting at the current
    /// offset.
    #[must_use]
    pub fn compute_viewmodel(&self, capacity: usize) -> UIViewModel {
        let start = self.offset.min(self.filtered.len());
        let end = (start + capacity.max(1)).min(self.filtered.len());

        let display_items: Vec<DisplayItem> = self.filtered[start..end]
            .iter()
            .enumerate()
            .filter_map(|(relative, &catalog_index)| {
                let entry = self.catalog.get(catalog_index)?;
                Some(DisplayItem {
                    name: entry.display_name.clone(),
                    is_flatpak: entry.is_flatpak(),
                    is_selected: start + relative == self.highlight,
                })
            })
            .collect();

        let selected_index = display_items.iter().position(|item| item.is_selected);

        let empty_state = self.filtered.is_empty().then(|| EmptyState {
            message: "No matches".to_string(),
        });

        UIViewModel {
            display_items,
            selected_index,
            header: HeaderInfo {
                title: format!(" m ({}/{}) ", self.filtered.len(), self.catalog.len()),
            },
            search_bar: SearchBarInfo {
                query: self.query.to_string(),
                show_cursor: !self.query.is_empty(),
            },
            footer: FooterInfo {
                keybindings: KEYBINDINGS.to_string(),
            },
            empty_state,
            window: start..end,
        }
    }
}
