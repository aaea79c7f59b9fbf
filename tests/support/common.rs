#![allow(dead_code)]

use anyhow::Result;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Slug carried by two records in [`twenty_with_duplicate`].
pub const DUPLICATED_SLUG: &str = "web-audio";
/// Raw position of the record that keeps [`DUPLICATED_SLUG`].
pub const FIRST_CARRIER: usize = 5;
/// Raw position of the record that loses it.
pub const SECOND_CARRIER: usize = 14;

pub fn record_value(slug: &str, title: &str) -> Value {
    json!({
        "slug": slug,
        "title": title,
        "summary": format!("Summary for {title}."),
        "description": format!("Description for {title}."),
        "codeSnippet": "console.log('demo');"
    })
}

pub fn document_value(tips: &[Value]) -> Value {
    json!({
        "schema_version": "tip_catalog_v1",
        "tips": tips
    })
}

/// Write a document to a temp file the CLI can read via `--content`.
pub fn write_document(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

/// Twenty authored records where position 14 repeats the slug of position 5.
///
/// Every other slug is distinct, so a correct build publishes 19 tips and
/// reports exactly one duplicate.
pub fn twenty_with_duplicate() -> Vec<Value> {
    let slugs = [
        "hoisting",
        "closure",
        "destructuring",
        "arrow-functions",
        "spread-operator",
        DUPLICATED_SLUG,
        "async-await",
        "optional-chaining",
        "nullish-coalescing",
        "template-literals",
        "array-methods",
        "object-methods",
        "sets",
        "maps",
        DUPLICATED_SLUG,
        "promises",
        "generators",
        "proxy",
        "modules",
        "regex",
    ];
    slugs
        .iter()
        .enumerate()
        .map(|(position, slug)| {
            let title = match position {
                FIRST_CARRIER => "Web Audio Basics".to_string(),
                SECOND_CARRIER => "Web Audio, Revisited".to_string(),
                _ => format!("About {slug}"),
            };
            record_value(slug, &title)
        })
        .collect()
}
