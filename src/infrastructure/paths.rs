//! Filesystem locations used by the launcher.
//!
//! Shortcut directories follow the freedesktop layout used by distribution packages
//! and Flatpak exports. The log directory lives under the user's XDG data directory.

use crate::domain::SourceKind;
use std::path::{Path, PathBuf};

/// System-wide shortcuts installed by the package manager.
pub const SYSTEM_APPLICATIONS_DIR: &str = "/usr/share/applications";

/// Per-user Flatpak exports, relative to the home directory.
pub const USER_FLATPAK_APPLICATIONS_DIR: &str = ".local/share/flatpak/exports/share/applications";

/// System-wide Flatpak exports.
pub const SYSTEM_FLATPAK_APPLICATIONS_DIR: &str = "/var/lib/flatpak/exports/share/applications";

/// A directory to scan and the provenance of the shortcuts found there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// Returns the directories to scan, in scan order.
///
/// The per-user Flatpak directory is omitted when `home` is `None`.
///
/// # Examples
///
/// ```
/// use mlaunch::infrastructure::shortcut_sources;
/// use std::path::Path;
///
/// let sources = shortcut_sources(Some(Path::new("/home/ada")));
/// assert_eq!(sources.len(), 3);
/// assert_eq!(
///     sources[1].path,
///     Path::new("/home/ada/.local/share/flatpak/exports/share/applications")
/// );
///
/// assert_eq!(shortcut_sources(None).len(), 2);
/// ```
#[must_use]
pub fn shortcut_sources(home: Option<&Path>) -> Vec<ShortcutSource> {
    let mut sources = vec![ShortcutSource {
        path: PathBuf::from(SYSTEM_APPLICATIONS_DIR),
        kind: SourceKind::Native,
    }];

    if let Some(home) = home {
        sources.push(ShortcutSource {
            path: home.join(USER_FLATPAK_APPLICATIONS_DIR),
            kind: SourceKind::Flatpak,
        });
    }

    sources.push(ShortcutSource {
        path: PathBuf::from(SYSTEM_FLATPAK_APPLICATIONS_DIR),
        kind: SourceKind::Flatpak,
    });

    sources
}

/// Returns the directory holding the launcher's log files.
///
/// Resolves to `~/.local/share/mlaunch`, or `None` without a home directory.
#[must_use]
pub fn get_data_dir(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|home| home.join(".local").join("share").join("mlaunch"))
}
