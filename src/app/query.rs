//! Bounded search query text.

/// Maximum number of characters the query may hold.
pub const MAX_QUERY_LEN: usize = 63;

/// The text typed by the user.
///
/// Only printable ASCII is accepted, so the character count equals the byte count and
/// the query never grows wider than [`MAX_QUERY_LEN`] terminal cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Whether `c` may be typed into a query.
    #[must_use]
    pub const fn accepts(c: char) -> bool {
        matches!(c, ' '..='~')
    }

    /// Appends `c`, returning `false` (and leaving the query untouched) when `c` is not
    /// printable ASCII or the query is full.
    pub fn push(&mut self, c: char) -> bool {
        if !Self::accepts(c) || self.text.len() >= MAX_QUERY_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Removes the last character, returning `false` when the query was already empty.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
