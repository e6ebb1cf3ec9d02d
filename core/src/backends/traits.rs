#![deny(missing_docs)]

//! # Backend Trait
//!
//! Defines the interface a metadata renderer implements.

use crate::error::AppResult;
use crate::metadata::MetadataSet;

/// A strategy trait decoupling extraction from the generated output format.
pub trait MetadataBackend {
    /// Short identifier used in logs and CLI selection (e.g. `entt`).
    fn name(&self) -> &'static str;

    /// Renders the full generated file for the given descriptions.
    ///
    /// Descriptions must be emitted in the order the set holds them.
    fn render(&self, set: &MetadataSet) -> AppResult<String>;
}
