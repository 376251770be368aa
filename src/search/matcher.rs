//! Case-insensitive substring matching.
//!
//! Folding is ASCII-only: non-ASCII characters must match exactly.

/// Returns `true` when `query` occurs in `name`, ignoring ASCII case.
///
/// An empty query matches every name.
///
/// # Examples
///
/// ```
/// use mlaunch::search::matches;
///
/// assert!(matches("Firefox", "FIRE"));
/// assert!(matches("Firefox", ""));
/// assert!(!matches("Files", "Firefox"));
/// ```
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_ascii_lowercase()
        .contains(query.to_ascii_lowercase().as_str())
}
