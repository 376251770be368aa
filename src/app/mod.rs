//! Application layer: the incremental-search session state machine.
//!
//! Sits between the terminal loop (`main.rs`) and the domain/search layers.
//!
//! ```text
//! Key press → Event → handle_event → SessionState mutation → Transition
//!                                           │
//!                           scroll_into_view + compute_viewmodel → UI
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and transition results
//! - [`query`]: Bounded query text
//! - [`state`]: Session state container and view model computation
//! - [`viewport`]: Scroll offset computation

pub mod handler;
pub mod query;
pub mod state;
pub mod viewport;

pub use handler::{handle_event, Event, Outcome, Transition};
pub use query::{Query, MAX_QUERY_LEN};
pub use state::{SessionState, PAGE_SIZE};
