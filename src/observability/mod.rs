//! File-based logging for the launcher.
//!
//! The launcher owns the terminal while it runs, so diagnostics go to a log
//! file instead of stderr:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → ~/.local/share/mlaunch/mlaunch.log
//! ```
//!
//! # Features
//!
//! - **Plain text**: One line per event, no ANSI colors
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Optional**: Any setup failure leaves tracing disabled, never the launcher
//!
//! # Configuration
//!
//! The filter comes from `MLAUNCH_LOG` (see [`crate::Config`]), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
