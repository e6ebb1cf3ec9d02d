#![deny(missing_docs)]

//! # JSON Backend
//!
//! Emits the extracted descriptions as a pretty-printed JSON array.

use crate::backends::MetadataBackend;
use crate::error::AppResult;
use crate::metadata::MetadataSet;

/// Renders descriptions as `[{ "name", "serializedFields", "fieldTypes" }]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl MetadataBackend for JsonBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, set: &MetadataSet) -> AppResult<String> {
        let mut json = serde_json::to_string_pretty(set.structs())?;
        json.push('\n');
        Ok(json)
    }
}
