//! Authored content model.
//!
//! [`RawTipRecord`] mirrors the loosely typed authored shape: every field is
//! a plain string and absent fields deserialize to empty strings, so one
//! sloppy record cannot fail the whole document. Promotion into [`Tip`]
//! happens in the builder; this module only gets the document parsed and
//! version-checked.

use crate::catalog::Slug;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Version marker expected at the top of content documents.
pub const TIP_CATALOG_SCHEMA_VERSION: &str = "tip_catalog_v1";

/// Comma-separated extra `schema_version` values accepted at load time.
pub const ENV_ALLOWED_CATALOG_SCHEMAS: &str = "TIPDECK_ALLOWED_CATALOG_SCHEMAS";

/// The authored tip list compiled into the binary.
pub const BUNDLED_CONTENT: &str = include_str!("../../content/tips.json");

/// Versioned wrapper around the ordered authored tip list.
#[derive(Clone, Debug, Deserialize)]
pub struct TipDocument {
    pub schema_version: String,
    #[serde(default)]
    pub tips: Vec<RawTipRecord>,
}

/// One authored record, exactly as written. Nothing is validated yet.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTipRecord {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub code_snippet: String,
}

/// A catalog entry that survived the build. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub code_snippet: String,
}

/// Parse a content document and check its version marker.
pub fn parse_document(input: &str) -> Result<TipDocument> {
    let document: TipDocument =
        serde_json::from_str(input).context("parsing tip catalog document")?;
    validate_schema_version(&document.schema_version)?;
    Ok(document)
}

/// Read and parse a content document from disk.
pub fn load_document_from_path(path: &Path) -> Result<TipDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading tip catalog {}", path.display()))?;
    parse_document(&data).with_context(|| format!("loading tip catalog {}", path.display()))
}

/// Parse the compiled-in content document.
pub fn bundled_document() -> Result<TipDocument> {
    parse_document(BUNDLED_CONTENT).context("loading bundled tip catalog")
}

// A single document format ships today; reject unexpected versions instead of
// guessing at their shape. The env override widens the accepted set for
// callers staging a content migration.
fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }
    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("schema_version must match ^[A-Za-z0-9_.-]+$, got '{schema_version}'");
    }
    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!("schema_version '{schema_version}' is not in the allowed set {allowed:?}");
    }
    Ok(())
}

/// Accepted `schema_version` values: the compiled-in marker plus any listed
/// in `TIPDECK_ALLOWED_CATALOG_SCHEMAS`.
pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions = BTreeSet::new();
    versions.insert(TIP_CATALOG_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_CATALOG_SCHEMAS) {
        for version in raw.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            versions.insert(version.to_string());
        }
    }
    versions
}
