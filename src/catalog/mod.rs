//! Tip catalog wiring.
//!
//! This module turns the authored content document (the bundled
//! `content/tips.json` or a caller-supplied file) into a validated,
//! slug-indexed [`Catalog`]. Types in `model` mirror the authored fields;
//! callers resolve tips through [`Catalog`] and reach the process-wide
//! instance via [`shared_catalog`].

pub mod identity;
pub mod index;
pub mod model;
pub mod report;

pub use identity::Slug;
pub use index::{Catalog, CatalogBuild, build_catalog};
pub use model::{
    BUNDLED_CONTENT, ENV_ALLOWED_CATALOG_SCHEMAS, RawTipRecord, TIP_CATALOG_SCHEMA_VERSION, Tip,
    TipDocument, allowed_schema_versions, bundled_document, load_document_from_path,
    parse_document,
};
pub use report::{BuildIssue, BuildReport};

use anyhow::Result;
use std::sync::OnceLock;
use tracing::warn;

/// Log every recovered build issue as a warning, one line per issue.
pub fn log_report(report: &BuildReport) {
    for issue in report.issues() {
        warn!("{issue}");
    }
}

/// Process-wide catalog built once from the bundled content document.
///
/// The build runs at most once per process and every caller sees the same
/// value. Concurrent first calls may parse the document more than once, but
/// only the published build is kept and only its report is logged.
pub fn shared_build() -> Result<&'static CatalogBuild> {
    static SHARED: OnceLock<CatalogBuild> = OnceLock::new();
    if let Some(build) = SHARED.get() {
        return Ok(build);
    }
    let document = bundled_document()?;
    let build = build_catalog(document.tips);
    Ok(SHARED.get_or_init(|| {
        log_report(&build.report);
        build
    }))
}

/// The catalog half of [`shared_build`].
pub fn shared_catalog() -> Result<&'static Catalog> {
    Ok(&shared_build()?.catalog)
}
