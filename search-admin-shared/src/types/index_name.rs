//! Normalized index name identifier.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized index name.
///
/// The search engine treats index names case-insensitively in practice, so
/// names are lower-cased and trimmed on construction. An empty name is not
/// representable: `normalize` returns `None` for whitespace-only input,
/// which keeps the "non-empty" precondition in the type rather than at
/// every call site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexName(String);

impl IndexName {
    /// Normalize a raw name: trim surrounding whitespace and lower-case it.
    ///
    /// Returns `None` when nothing remains after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point-in-time snapshot of the index names known to the cluster.
///
/// Not cached; recomputed on each listing request. Empty is a valid result.
pub type IndexListing = BTreeSet<IndexName>;
