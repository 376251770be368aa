//! Query matching and filtered index construction.
//!
//! - [`matcher`]: ASCII case-insensitive substring test
//! - [`filter`]: rebuilds the filtered index list for a query

pub mod filter;
pub mod matcher;

pub use filter::rebuild;
pub use matcher::matches;
