//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to a plain-text fmt layer writing into the rotating
//! log file under the data directory. The terminal itself is never written to,
//! since it is owned by the launcher's UI.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the active log file inside the data directory.
pub const LOG_FILE_NAME: &str = "mlaunch.log";

/// Initializes the tracing subscriber with rotating file output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive works, e.g.
///    `"mlaunch=debug"`)
/// 2. Default: `"info"`
///
/// An unparsable directive falls back to `"info"`.
///
/// # File Location
///
/// `~/.local/share/mlaunch/mlaunch.log`, with up to three rotated backups.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips logging when there is no home directory or the directory
///   cannot be created (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use mlaunch::observability::init_tracing;
/// use mlaunch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     home: None,
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("dropped, no log directory");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let Some(data_dir) = get_data_dir(config.home.as_deref()) else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(FileWriter::new(data_dir.join(LOG_FILE_NAME)));

    let subscriber = tracing_subscriber::registry().with(filter).with(file_layer);

    let _ = subscriber.try_init();
}
