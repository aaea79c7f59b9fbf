//! Slug identity for catalog entries.
//!
//! Slugs arrive as free-form strings from the authored content and stay
//! verbatim once accepted: lookup is exact and case-sensitive, so nothing is
//! trimmed or case-folded here. `is_usable` is the build-time gate;
//! `is_well_formed` is the stricter style predicate the authoring lint
//! reports on without rejecting.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// URL-safe identifier for a tip, unique within a published catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(pub String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug can key a catalog record at all.
    ///
    /// Empty and whitespace-only slugs are unusable; everything else is
    /// accepted verbatim.
    pub fn is_usable(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Style check: lowercase ASCII letters and digits in hyphen-separated
    /// runs, with no leading, trailing, or doubled hyphen.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('-')
            && !self.0.ends_with('-')
            && !self.0.contains("--")
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width and alignment flags working in columns.
        f.pad(&self.0)
    }
}

// Lets the slug index answer `&str` lookups without allocating a key.
impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}
