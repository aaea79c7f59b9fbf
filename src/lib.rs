//! Slug-addressed catalog of short JavaScript tips with two-view navigation.
//!
//! The authored content is a flat ordered list of records that may carry
//! duplicate or missing slugs. [`build_catalog`] reconciles it into an
//! immutable first-occurrence-wins index plus an integrity report, and
//! [`resolver`] maps the two navigational states (overview, detail-by-slug)
//! onto that index. The `tipdeck` binary is the terminal view layer over
//! both, and [`schema`] carries the stricter authoring contract used by
//! `tipdeck check`.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod resolver;
pub mod schema;

pub use catalog::{
    BUNDLED_CONTENT, BuildIssue, BuildReport, Catalog, CatalogBuild, ENV_ALLOWED_CATALOG_SCHEMAS,
    RawTipRecord, Slug, TIP_CATALOG_SCHEMA_VERSION, Tip, TipDocument, allowed_schema_versions,
    build_catalog, bundled_document, load_document_from_path, log_report, parse_document,
    shared_build, shared_catalog,
};
pub use resolver::{Route, View, list_all, navigate, resolve};
pub use schema::{TIP_CATALOG_SCHEMA_JSON, validate_document};
