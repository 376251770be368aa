//! Filtered index computation over the catalog.

use super::matcher::matches;
use crate::domain::Catalog;

/// Returns, in catalog order, the indices of every entry whose display name matches
/// `query`.
///
/// The result is always recomputed from scratch. Because the catalog is sorted, the
/// filtered list is sorted as well.
///
/// # Examples
///
/// ```
/// use mlaunch::domain::{AppEntry, Catalog, SourceKind};
/// use mlaunch::search::rebuild;
///
/// let catalog = Catalog::new(
///     ["Files.desktop", "Firefox.desktop", "GIMP.desktop"]
///         .iter()
///         .filter_map(|n| AppEntry::from_file_name(n, SourceKind::Native))
///         .collect(),
/// );
/// assert_eq!(rebuild(&catalog, "fi"), vec![0, 1]);
/// ```
#[must_use]
pub fn rebuild(catalog: &Catalog, query: &str) -> Vec<usize> {
    let _span = tracing::debug_span!(
        "rebuild_filter",
        catalog_len = catalog.len(),
        query_len = query.len()
    )
    .entered();

    let filtered: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches(&entry.display_name, query))
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter rebuilt");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppEntry, SourceKind};

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|name| AppEntry {
                    display_name: (*name).to_string(),
                    launch_token: format!("{name}.desktop"),
                    source_kind: SourceKind::Native,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = catalog(&["a", "b", "c", "d"]);
        assert_eq!(rebuild(&catalog, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn no_matches_yields_empty() {
        let catalog = catalog(&["Files", "Firefox"]);
        assert!(rebuild(&catalog, "zzz").is_empty());
    }

    #[test]
    fn membership_agrees_with_matcher() {
        let catalog = catalog(&["Terminal", "Text Editor", "Settings", "Tetris", "htop"]);
        for query in ["t", "te", "ter", "T", "set", "op", "x", " "] {
            let filtered = rebuild(&catalog, query);
            for (index, entry) in catalog.iter().enumerate() {
                assert_eq!(
                    filtered.contains(&index),
                    matches(&entry.display_name, query),
                    "query {query:?}, entry {}",
                    entry.display_name
                );
            }
            assert!(filtered.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn empty_catalog_filters_to_nothing() {
        assert!(rebuild(&Catalog::default(), "").is_empty());
    }
}
