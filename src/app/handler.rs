//! Event handling and state transition logic.
//!
//! [`handle_event`] maps each input [`Event`] to exactly one transition of the
//! session state machine, or ignores it. The machine has a single running state; it
//! ends when a transition produces an [`Outcome`].
//!
//! # Event Types
//!
//! - **Navigation**: `MoveUp`, `MoveDown`, `PageUp`, `PageDown` (never refilter)
//! - **Editing**: `AppendChar`, `Backspace` (always refilter and reset to the top)
//! - **Terminal**: `Commit`, `Cancel`
//!
//! # Example
//!
//! ```rust
//! use mlaunch::app::{handle_event, Event, Outcome, SessionState, Transition};
//! use mlaunch::domain::{AppEntry, Catalog, SourceKind};
//!
//! let catalog = Catalog::new(vec![
//!     AppEntry::from_file_name("btop.desktop", SourceKind::Native).unwrap(),
//!     AppEntry::from_file_name("gimp.desktop", SourceKind::Native).unwrap(),
//! ]);
//! let mut state = SessionState::new(&catalog);
//!
//! assert_eq!(handle_event(&mut state, &Event::MoveDown), Transition::Updated);
//! assert_eq!(
//!     handle_event(&mut state, &Event::Commit),
//!     Transition::Finished(Outcome::Committed(1))
//! );
//! ```

use super::state::SessionState;

/// Input events understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Highlight the previous row.
    MoveUp,
    /// Highlight the next row.
    MoveDown,
    /// Highlight five rows further down, stopping at the last row.
    PageDown,
    /// Highlight five rows further up, stopping at the first row.
    PageUp,
    /// Launch the highlighted entry.
    Commit,
    /// Leave without launching anything.
    Cancel,
    /// Remove the last query character.
    Backspace,
    /// Append a character to the query.
    AppendChar(char),
    /// Any input without a transition.
    Other,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed an entry; carries its catalog index.
    Committed(usize),
    /// The user quit without choosing.
    Cancelled,
}

/// Result of feeding one event into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event's precondition did not hold; nothing changed.
    Ignored,
    /// State changed; the next frame differs.
    Updated,
    /// The session is over.
    Finished(Outcome),
}

impl Transition {
    const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Updated
        } else {
            Self::Ignored
        }
    }
}

/// Applies `event` to `state`.
///
/// Every event is total: when its precondition fails (moving past either end,
/// committing with no matches, deleting from an empty query, typing a non-printable
/// character or into a full query) the state is left untouched and
/// [`Transition::Ignored`] is returned.
pub fn handle_event(state: &mut SessionState<'_>, event: &Event) -> Transition {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let transition = match *event {
        Event::MoveUp => Transition::from_changed(state.move_up()),
        Event::MoveDown => Transition::from_changed(state.move_down()),
        Event::PageDown => Transition::from_changed(state.page_down()),
        Event::PageUp => Transition::from_changed(state.page_up()),
        Event::Commit => match state.selected_index() {
            Some(index) => {
                tracing::debug!(catalog_index = index, "entry committed");
                Transition::Finished(Outcome::Committed(index))
            }
            None => {
                tracing::debug!("commit ignored, nothing matches");
                Transition::Ignored
            }
        },
        Event::Cancel => {
            tracing::debug!("session cancelled");
            Transition::Finished(Outcome::Cancelled)
        }
        Event::Backspace => Transition::from_changed(state.pop_char()),
        Event::AppendChar(c) => Transition::from_changed(state.push_char(c)),
        Event::Other => Transition::Ignored,
    };

    tracing::trace!(
        highlight = state.highlight(),
        filtered_count = state.filtered().len(),
        transition = ?transition,
        "event handled"
    );
    transition
}
