//! Application entry model.
//!
//! An [`AppEntry`] describes one launchable application discovered from a `.desktop`
//! shortcut file. Entries are immutable once built.

/// File name marker identifying shortcut files.
pub const SHORTCUT_SUFFIX: &str = ".desktop";

/// Provenance of a shortcut, deciding which launch helper is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Installed through the system package manager, launched with `gtk-launch`.
    Native,
    /// Exported by a Flatpak installation, launched with `flatpak run`.
    Flatpak,
}

/// A launchable application.
///
/// # Fields
///
/// - `display_name`: what the list shows and the matcher searches
/// - `launch_token`: the shortcut file name, handed to the launch helper
/// - `source_kind`: where the shortcut was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub display_name: String,
    pub launch_token: String,
    pub source_kind: SourceKind,
}

impl AppEntry {
    /// Builds an entry from a shortcut file name.
    ///
    /// Returns `None` when the name does not contain `.desktop`. The display name is
    /// the file name cut at the first `.desktop` occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlaunch::domain::{AppEntry, SourceKind};
    ///
    /// let entry = AppEntry::from_file_name("firefox.desktop", SourceKind::Native).unwrap();
    /// assert_eq!(entry.display_name, "firefox");
    /// assert_eq!(entry.launch_token, "firefox.desktop");
    ///
    /// assert!(AppEntry::from_file_name("README", SourceKind::Native).is_none());
    /// ```
    #[must_use]
    pub fn from_file_name(file_name: &str, source_kind: SourceKind) -> Option<Self> {
        let cut = file_name.find(SHORTCUT_SUFFIX)?;
        Some(Self {
            display_name: file_name[..cut].to_string(),
            launch_token: file_name.to_string(),
            source_kind,
        })
    }

    /// Returns the launch token with everything from `.desktop` onward removed.
    ///
    /// This is the Flatpak application id (`org.gimp.GIMP.desktop` → `org.gimp.GIMP`).
    #[must_use]
    pub fn app_id(&self) -> &str {
        self.launch_token
            .find(SHORTCUT_SUFFIX)
            .map_or(self.launch_token.as_str(), |cut| &self.launch_token[..cut])
    }

    /// Whether this entry came from a Flatpak export directory.
    #[must_use]
    pub fn is_flatpak(&self) -> bool {
        self.source_kind == SourceKind::Flatpak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_cut_at_first_marker() {
        let entry = AppEntry::from_file_name("odd.desktop.desktop", SourceKind::Native).unwrap();
        assert_eq!(entry.display_name, "odd");
        assert_eq!(entry.launch_token, "odd.desktop.desktop");
    }

    #[test]
    fn marker_may_appear_mid_name() {
        let entry = AppEntry::from_file_name("backup.desktop~", SourceKind::Native).unwrap();
        assert_eq!(entry.display_name, "backup");
    }

    #[test]
    fn non_shortcut_files_are_rejected() {
        assert!(AppEntry::from_file_name("mimeinfo.cache", SourceKind::Native).is_none());
        assert!(AppEntry::from_file_name("", SourceKind::Flatpak).is_none());
    }

    #[test]
    fn app_id_strips_marker() {
        let entry = AppEntry::from_file_name("org.gimp.GIMP.desktop", SourceKind::Flatpak).unwrap();
        assert_eq!(entry.app_id(), "org.gimp.GIMP");
        assert!(entry.is_flatpak());
    }
}
