//! Command-line entry point.
//!
//! # Lifecycle
//!
//! ```text
//! env → Config → init_tracing → run_launcher ──EmptyCatalog──→ stderr, exit 1
//!                                     │
//!                        acquire terminal → run_session → restore terminal
//!                                                              │
//!                                             Committed → launch (detached)
//! ```

use mlaunch::infrastructure::{shortcut_sources, CrosstermTerminal};
use mlaunch::observability::init_tracing;
use mlaunch::{exit_status, run_launcher, Config};
use std::collections::BTreeMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    let env: BTreeMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    let config = Config::from_env(&env);
    init_tracing(&config);
    config.log_rejected();
    tracing::debug!(config = ?config, "configuration loaded");

    let sources = shortcut_sources(config.home.as_deref());
    let result = run_launcher(&sources, &config, CrosstermTerminal::acquire);
    if let Err(e) = &result {
        tracing::error!(error = %e, "mlaunch failed");
        eprintln!("mlaunch: {e}");
    }
    ExitCode::from(exit_status(&result))
}
