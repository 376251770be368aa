//! Error types for the launcher.
//!
//! This module defines the centralized error type [`LauncherError`] and a type alias
//! [`Result`] used by everything outside the search core. The core itself (matching,
//! filtering, viewport, session transitions) is total and never returns errors.

use thiserror::Error;

/// The main error type for launcher operations.
///
/// Discovery problems are deliberately absent: an unreadable shortcut directory is
/// treated as an empty one and never surfaces as an error.
///
/// # Examples
///
/// ```
/// use mlaunch::LauncherError;
///
/// let err = LauncherError::EmptyCatalog;
/// assert_eq!(err.to_string(), "no applications found");
/// ```
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No shortcut directory produced a single entry.
    ///
    /// Fatal at startup. Reported on stderr before any UI is created.
    #[error("no applications found")]
    EmptyCatalog,

    /// Filesystem or terminal I/O failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be put into (or restored from) interactive mode.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The launch helper could not be spawned.
    ///
    /// Logged only; the launcher never reports launch outcomes to the user.
    #[error("Launch error: {0}")]
    Launch(String),

    /// An environment setting was present but unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
