//! mlaunch: a terminal launcher for desktop applications.
//!
//! mlaunch lists the `.desktop` shortcuts installed on the system (native and
//! Flatpak), narrows them with an incremental case-insensitive search, and starts
//! the chosen one detached from the terminal.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session loop (run_session)                         │  ← draw / read / handle
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ App Layer     │   │ UI Layer      │   │ Search        │
//! │ (app/)        │   │ (ui/)         │   │ (search/)     │
//! │ - State       │   │ - View models │   │ - Matching    │
//! │ - Events      │   │ - Components  │   │ - Filtering   │
//! │ - Viewport    │   │ - Layout      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Discovery, terminal, launcher (infrastructure/)  │
//! │  - Entries, catalog, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine
//! - [`domain`]: Core domain types (entries, catalog, errors)
//! - [`infrastructure`]: Discovery, terminal, and launching
//! - [`search`]: Case-insensitive substring filtering
//! - [`ui`]: Frame rendering
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Read from the environment; see [`Config::from_env`].
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `MLAUNCH_LOG` | `info` | Log filter directive |
//! | `MLAUNCH_WINDOW_HEIGHT` | `22` | Maximum box height (at least 5) |
//! | `MLAUNCH_WINDOW_WIDTH` | `60` | Maximum box width (at least 20) |
//! | `HOME` | | Per-user Flatpak shortcuts and the log directory |
//!
//! # Example
//!
//! ```rust
//! use mlaunch::app::{handle_event, Event, Outcome, SessionState, Transition};
//! use mlaunch::domain::{AppEntry, Catalog, SourceKind};
//!
//! let catalog = Catalog::new(vec![
//!     AppEntry::from_file_name("Files.desktop", SourceKind::Native).unwrap(),
//!     AppEntry::from_file_name("Firefox.desktop", SourceKind::Native).unwrap(),
//!     AppEntry::from_file_name("GIMP.desktop", SourceKind::Native).unwrap(),
//! ]);
//! let mut state = SessionState::new(&catalog);
//!
//! for c in "gi".chars() {
//!     handle_event(&mut state, &Event::AppendChar(c));
//! }
//! assert_eq!(
//!     handle_event(&mut state, &Event::Commit),
//!     Transition::Finished(Outcome::Committed(2))
//! );
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Event, Outcome, SessionState, Transition};
pub use domain::{AppEntry, Catalog, LauncherError, Result, SourceKind};

use infrastructure::{discover, launch, Input, ShortcutSource, Terminal};
use std::collections::BTreeMap;
use std::path::PathBuf;

const DEFAULT_WINDOW_HEIGHT: usize = 22;
const DEFAULT_WINDOW_WIDTH: usize = 60;
const MIN_WINDOW_HEIGHT: usize = 5;
const MIN_WINDOW_WIDTH: usize = 20;

/// Launcher configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Maximum height of the launcher box, borders included.
    ///
    /// The box never exceeds the terminal height minus two rows. Default: 22
    pub window_height: usize,

    /// Maximum width of the launcher box, borders included. Default: 60
    pub window_width: usize,

    /// The user's home directory, if known.
    pub home: Option<PathBuf>,

    /// Settings that were present but unusable, each replaced by its default.
    ///
    /// Kept so they can be reported once logging is up; see
    /// [`Config::log_rejected`].
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            home: None,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Parses configuration from environment variables.
    ///
    /// # Parsing Rules
    ///
    /// - `MLAUNCH_LOG`: String → `Option<String>`
    /// - `MLAUNCH_WINDOW_HEIGHT`: String → `usize`, at least 5 (default 22)
    /// - `MLAUNCH_WINDOW_WIDTH`: String → `usize`, at least 20 (default 60)
    /// - `HOME`: non-empty String → `Option<PathBuf>`
    ///
    /// Invalid values are replaced by their defaults and recorded in
    /// [`Config::rejected`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mlaunch::Config;
    ///
    /// let mut env = BTreeMap::new();
    /// env.insert("MLAUNCH_WINDOW_HEIGHT".to_string(), "12".to_string());
    /// env.insert("MLAUNCH_WINDOW_WIDTH".to_string(), "wide".to_string());
    ///
    /// let config = Config::from_env(&env);
    /// assert_eq!(config.window_height, 12);
    /// assert_eq!(config.window_width, 60);
    /// assert_eq!(config.rejected.len(), 1);
    /// ```
    #[must_use]
    pub fn from_env(env: &BTreeMap<String, String>) -> Self {
        let mut rejected = Vec::new();
        let mut dimension = |key: &str, min: usize, default: usize| {
            env.get(key).map_or(default, |value| {
                parse_dimension(key, value, min).unwrap_or_else(|e| {
                    rejected.push(e.to_string());
                    default
                })
            })
        };

        let window_height = dimension("MLAUNCH_WINDOW_HEIGHT", MIN_WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT);
        let window_width = dimension("MLAUNCH_WINDOW_WIDTH", MIN_WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH);

        Self {
            trace_level: env.get("MLAUNCH_LOG").cloned(),
            window_height,
            window_width,
            home: env.get("HOME").filter(|h| !h.is_empty()).map(PathBuf::from),
            rejected,
        }
    }

    /// Logs every rejected setting at warn level.
    ///
    /// Called after [`observability::init_tracing`], which itself depends on the
    /// parsed configuration.
    pub fn log_rejected(&self) {
        for problem in &self.rejected {
            tracing::warn!(problem = %problem, "ignoring invalid setting, using default");
        }
    }
}

fn parse_dimension(key: &str, value: &str, min: usize) -> Result<usize> {
    let parsed = value
        .trim()
        .parse::<usize>()
        .map_err(|e| LauncherError::Config(format!("{key}={value:?}: {e}")))?;
    if parsed < min {
        return Err(LauncherError::Config(format!("{key}={parsed} is below the minimum of {min}")));
    }
    Ok(parsed)
}

/// Discovers the shortcuts in `sources`, scanned in order.
///
/// # Errors
///
/// Returns [`LauncherError::EmptyCatalog`] when no source yields an entry.
pub fn load_catalog_from(sources: &[ShortcutSource]) -> Result<Catalog> {
    let catalog = discover(sources);
    if catalog.is_empty() {
        return Err(LauncherError::EmptyCatalog);
    }
    Ok(catalog)
}

/// Runs the whole launcher: discovery, the interactive session, and the launch.
///
/// `acquire` is only called once a non-empty catalog exists, and the terminal it
/// returns is dropped (restoring the screen) before anything is launched. A launch
/// failure is logged and does not make the run fail.
///
/// # Errors
///
/// Returns [`LauncherError::EmptyCatalog`] when nothing was discovered, or any
/// terminal error from acquiring or driving the session.
pub fn run_launcher<T, F>(sources: &[ShortcutSource], config: &Config, acquire: F) -> Result<Outcome>
where
    T: Terminal,
    F: FnOnce() -> Result<T>,
{
    let catalog = load_catalog_from(sources)?;

    let outcome = {
        let mut terminal = acquire()?;
        run_session(&catalog, config, &mut terminal)?
    };

    match outcome {
        Outcome::Committed(index) => {
            if let Some(entry) = catalog.get(index) {
                if let Err(e) = launch(entry) {
                    tracing::warn!(app = %entry.display_name, error = %e, "launch failed");
                }
            }
        }
        Outcome::Cancelled => tracing::info!("cancelled"),
    }

    Ok(outcome)
}

/// Process exit status for the result of [`run_launcher`]: 0 on success, 1 on any
/// error.
#[must_use]
pub const fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Runs an interactive session over `catalog` until it is committed or cancelled.
///
/// Each iteration lays a frame out for the terminal's current size, draws it, and
/// feeds the next input into [`handle_event`]. A resize just triggers the next
/// redraw.
///
/// # Errors
///
/// Propagates terminal I/O failures; the session state is discarded.
pub fn run_session(catalog: &Catalog, config: &Config, terminal: &mut impl Terminal) -> Result<Outcome> {
    let _span = tracing::debug_span!("run_session", entries = catalog.len()).entered();
    let mut state = SessionState::new(catalog);

    loop {
        let (rows, cols) = terminal.size()?;
        let frame = ui::render(&mut state, rows, cols, config)?;
        terminal.draw(&frame)?;

        match terminal.read_input()? {
            Input::Resize => tracing::trace!("terminal resized"),
            Input::Event(event) => {
                if let Transition::Finished(outcome) = handle_event(&mut state, &event) {
                    tracing::debug!(outcome = ?outcome, "session finished");
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(Config::from_env(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_env(&env(&[
            ("MLAUNCH_LOG", "debug"),
            ("MLAUNCH_WINDOW_HEIGHT", "10"),
            ("MLAUNCH_WINDOW_WIDTH", " 80 "),
            ("HOME", "/home/ada"),
        ]));

        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.window_height, 10);
        assert_eq!(config.window_width, 80);
        assert_eq!(config.home, Some(PathBuf::from("/home/ada")));
    }

    #[test]
    fn invalid_dimensions_fall_back() {
        let config = Config::from_env(&env(&[
            ("MLAUNCH_WINDOW_HEIGHT", "4"),
            ("MLAUNCH_WINDOW_WIDTH", "-1"),
        ]));

        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.rejected.len(), 2);
        assert!(config.rejected[0].contains("MLAUNCH_WINDOW_HEIGHT"));
        assert!(config.rejected[1].contains("MLAUNCH_WINDOW_WIDTH"));
    }

    #[test]
    fn valid_settings_reject_nothing() {
        let config = Config::from_env(&env(&[("MLAUNCH_WINDOW_HEIGHT", "5")]));
        assert_eq!(config.window_height, 5);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn exit_status_maps_errors_to_one() {
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(exit_status::<()>(&Err(LauncherError::EmptyCatalog)), 1);
    }

    #[test]
    fn empty_home_is_none() {
        assert_eq!(Config::from_env(&env(&[("HOME", "")])).home, None);
    }

    #[test]
    fn parse_dimension_reports_key() {
        let err = parse_dimension("MLAUNCH_WINDOW_WIDTH", "3", 20).unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
        assert!(err.to_string().contains("MLAUNCH_WINDOW_WIDTH"));
    }
}
