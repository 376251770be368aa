//! The sorted, read-only application catalog.

use super::entry::AppEntry;
use std::cmp::Ordering;

/// Compares two names byte-wise after ASCII lower-casing.
///
/// Non-ASCII bytes compare by raw value.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Every discovered application, sorted by display name.
///
/// Built once at startup and never mutated afterwards. Sorting is stable, so entries
/// with names that compare equal keep the order in which they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Catalog {
    /// Sorts `entries` case-insensitively and freezes them into a catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlaunch::domain::{AppEntry, Catalog, SourceKind};
    ///
    /// let entries = ["gimp.desktop", "Files.desktop", "firefox.desktop"]
    ///     .iter()
    ///     .filter_map(|name| AppEntry::from_file_name(name, SourceKind::Native))
    ///     .collect();
    /// let catalog = Catalog::new(entries);
    ///
    /// let names: Vec<_> = catalog.iter().map(|e| e.display_name.as_str()).collect();
    /// assert_eq!(names, ["Files", "firefox", "gimp"]);
    /// ```
    #[must_use]
    pub fn new(mut entries: Vec<AppEntry>) -> Self {
        entries.sort_by(|a, b| compare_names(&a.display_name, &b.display_name));
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AppEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AppEntry;
    type IntoIter = std::slice::Iter<'a, AppEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceKind;

    fn entry(name: &str, kind: SourceKind) -> AppEntry {
        AppEntry {
            display_name: name.to_string(),
            launch_token: format!("{name}.desktop"),
            source_kind: kind,
        }
    }

    #[test]
    fn sorted_case_insensitively() {
        let catalog = Catalog::new(vec![
            entry("zed", SourceKind::Native),
            entry("Alacritty", SourceKind::Native),
            entry("btop", SourceKind::Flatpak),
            entry("Blender", SourceKind::Native),
        ]);

        let names: Vec<_> = catalog.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, ["Alacritty", "Blender", "btop", "zed"]);
    }

    #[test]
    fn equal_names_keep_discovery_order() {
        let catalog = Catalog::new(vec![
            entry("Steam", SourceKind::Native),
            entry("other", SourceKind::Native),
            entry("steam", SourceKind::Flatpak),
        ]);

        assert_eq!(catalog.get(1).map(|e| e.source_kind), Some(SourceKind::Native));
        assert_eq!(catalog.get(2).map(|e| e.source_kind), Some(SourceKind::Flatpak));
    }

    #[test]
    fn compare_names_folds_ascii_only() {
        assert_eq!(compare_names("Files", "files"), Ordering::Equal);
        assert_eq!(compare_names("abc", "ABCD"), Ordering::Less);
        assert_eq!(compare_names("Zed", "_zed"), Ordering::Greater);
        assert_eq!(compare_names("É", "é"), Ordering::Less);
    }

    #[test]
    fn sort_is_non_decreasing() {
        let names = ["b", "A", "a", "C", "_x", "0", "Zz", "zy", "é", "E"];
        let catalog = Catalog::new(names.iter().map(|n| entry(n, SourceKind::Native)).collect());

        let entries: Vec<_> = catalog.iter().collect();
        for pair in entries.windows(2) {
            assert_ne!(
                compare_names(&pair[0].display_name, &pair[1].display_name),
                Ordering::Greater
            );
        }
        assert_eq!(catalog.len(), names.len());
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Files", "files-extra"), Ordering::Less);
        assert_eq!(compare_names("GIMP", "gimp"), Ordering::Equal);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
