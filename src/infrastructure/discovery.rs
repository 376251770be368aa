//! Shortcut discovery.
//!
//! Lists `.desktop` files in each configured directory. Discovery never fails: a
//! missing or unreadable directory simply contributes no entries.

use super::paths::ShortcutSource;
use crate::domain::{AppEntry, Catalog, SourceKind};
use std::fs;
use std::path::Path;

/// Lists the shortcut entries directly inside `dir`.
///
/// Entries are returned in directory order. Non-UTF-8 file names are skipped.
pub fn list_entries(dir: &Path, kind: SourceKind) -> Vec<AppEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "shortcut directory unavailable");
            return Vec::new();
        }
    };

    let entries: Vec<AppEntry> = read_dir
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::debug!(name = ?file_name, "skipping non UTF-8 file name");
                return None;
            };
            AppEntry::from_file_name(name, kind)
        })
        .collect();

    tracing::debug!(
        dir = %dir.display(),
        kind = ?kind,
        entry_count = entries.len(),
        "shortcut directory scanned"
    );
    entries
}

/// Scans every source in order and builds the sorted catalog.
///
/// The result may be empty; deciding whether that is fatal is up to the caller.
pub fn discover(sources: &[ShortcutSource]) -> Catalog {
    let _span = tracing::debug_span!("discover", source_count = sources.len()).entered();

    let entries: Vec<AppEntry> = sources
        .iter()
        .flat_map(|source| list_entries(&source.path, source.kind))
        .collect();

    tracing::info!(entry_count = entries.len(), "discovery complete");
    Catalog::new(entries)
}
