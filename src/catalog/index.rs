//! Canonical slug index over the authored tip list.
//!
//! The authored document is a flat ordered list that may repeat a slug or
//! omit one entirely. [`build_catalog`] reconciles it in a single forward
//! pass: the first record carrying a slug claims it, later carriers and
//! unusable records are dropped and reported, and the survivors keep their
//! authored relative order. The result is immutable, so lookups never
//! observe a half-built index.

use crate::catalog::report::{BuildIssue, BuildReport};
use crate::catalog::{RawTipRecord, Slug, Tip};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// De-duplicated, insertion-ordered tip collection with hashed slug lookup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tips: IndexMap<Slug, Tip>,
}

impl Catalog {
    /// Resolve a tip by exact, case-sensitive slug match.
    ///
    /// Returns `None` instead of erroring; for the detail view a miss is a
    /// rendered outcome, not a failure.
    pub fn get(&self, slug: &str) -> Option<&Tip> {
        self.tips.get(slug)
    }

    /// The tip at a 0-based position in the published order.
    pub fn get_index(&self, position: usize) -> Option<&Tip> {
        self.tips.get_index(position).map(|(_, tip)| tip)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.tips.contains_key(slug)
    }

    /// Tips in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = &Tip> {
        self.tips.values()
    }

    /// Slugs in first-occurrence order.
    pub fn slugs(&self) -> impl Iterator<Item = &Slug> {
        self.tips.keys()
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

/// A built catalog together with what the build recovered from.
#[derive(Clone, Debug)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub report: BuildReport,
}

/// Build the canonical catalog from the raw authored sequence.
///
/// Pure and deterministic: output order, lookup results, and report
/// contents are fully determined by input order. Positions in the report
/// index the raw sequence, so dropped records still consume a position.
pub fn build_catalog<I>(records: I) -> CatalogBuild
where
    I: IntoIterator<Item = RawTipRecord>,
{
    let mut tips: IndexMap<Slug, Tip> = IndexMap::new();
    // Raw position of each slug's first carrier, for duplicate reports.
    let mut first_seen: BTreeMap<Slug, usize> = BTreeMap::new();
    let mut report = BuildReport::default();

    for (position, record) in records.into_iter().enumerate() {
        let RawTipRecord {
            slug,
            title,
            summary,
            description,
            code_snippet,
        } = record;
        let slug = Slug(slug);
        if !slug.is_usable() {
            report.push(BuildIssue::MalformedRecord { position });
            continue;
        }
        if let Some(&first) = first_seen.get(&slug) {
            report.push(BuildIssue::DuplicateSlug {
                slug,
                first,
                duplicate: position,
            });
            continue;
        }
        first_seen.insert(slug.clone(), position);
        let tip = Tip {
            slug: slug.clone(),
            title,
            summary,
            description,
            code_snippet,
        };
        tips.insert(slug, tip);
    }

    CatalogBuild {
        catalog: Catalog { tips },
        report,
    }
}
