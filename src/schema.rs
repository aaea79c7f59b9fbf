//! Authoring contract for content documents.
//!
//! `tipdeck check` holds documents to the bundled JSON Schema before the
//! lenient runtime loader ever sees them. The loader tolerates record-level
//! problems so the catalog stays usable; the contract exists so authors hear
//! about those problems as failures instead.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;

/// JSON Schema contract for tip catalog documents.
pub const TIP_CATALOG_SCHEMA_JSON: &str = include_str!("../schema/tip_catalog.schema.json");

/// Validate a parsed document value against the authoring contract.
///
/// Returns one finding per violation, each prefixed with the instance path
/// it applies to; an empty vector means the document conforms. A contract
/// that fails to parse or compile is a hard error.
pub fn validate_document(document: &Value) -> Result<Vec<String>> {
    let schema: Value =
        serde_json::from_str(TIP_CATALOG_SCHEMA_JSON).context("parsing tip catalog contract")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling tip catalog contract: {err}"))?;

    let findings = match compiled.validate(document) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    format!("document: {err}")
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect(),
    };
    Ok(findings)
}
