//! Domain layer for the launcher.
//!
//! Core types independent of the terminal, the filesystem, and process spawning.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Application entry model
//! - [`catalog`]: Sorted, read-only collection of entries

pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::Catalog;
pub use entry::{AppEntry, SourceKind};
pub use error::{LauncherError, Result};
