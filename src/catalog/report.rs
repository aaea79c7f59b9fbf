//! Build-time integrity reporting.
//!
//! The builder never aborts on a bad record; every recovered decision lands
//! here instead. Issues carry 0-based positions in the raw authored
//! sequence, the coordinates an author sees when editing the content
//! document, not positions in the de-duplicated output.

use crate::catalog::Slug;
use thiserror::Error;

/// One recovered integrity problem from a catalog build.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildIssue {
    /// Two authored records share a slug; the earliest record stays
    /// canonical and the later one is dropped.
    #[error(
        "duplicate slug `{slug}`: record {duplicate} conflicts with record {first}; keeping record {first}"
    )]
    DuplicateSlug {
        slug: Slug,
        first: usize,
        duplicate: usize,
    },
    /// The record has no usable slug and cannot be indexed.
    #[error("record {position} is missing a usable slug; record skipped")]
    MalformedRecord { position: usize },
}

/// Issues recovered by a single build, in encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    issues: Vec<BuildIssue>,
}

impl BuildReport {
    pub(crate) fn push(&mut self, issue: BuildIssue) {
        self.issues.push(issue);
    }

    /// Every recorded issue, oldest first.
    pub fn issues(&self) -> &[BuildIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn duplicate_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, BuildIssue::DuplicateSlug { .. }))
            .count()
    }

    pub fn malformed_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, BuildIssue::MalformedRecord { .. }))
            .count()
    }
}
