//! Infrastructure layer for filesystem, terminal, and process interactions.
//!
//! Everything here sits at the edge of the system: reading shortcut directories,
//! owning the terminal, and spawning launch helpers.
//!
//! - [`paths`]: Shortcut and data directory locations
//! - [`discovery`]: Directory listing into a catalog
//! - [`terminal`]: Raw-mode terminal and key mapping
//! - [`launcher`]: Detached launch helper invocation

pub mod discovery;
pub mod launcher;
pub mod paths;
pub mod terminal;

pub use discovery::{discover, list_entries};
pub use launcher::{launch, LaunchCommand};
pub use paths::{get_data_dir, shortcut_sources, ShortcutSource};
pub use terminal::{map_key_event, CrosstermTerminal, Input, Terminal};
