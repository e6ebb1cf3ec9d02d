#![deny(missing_docs)]

//! # Prebuild Core
//!
//! Core library of the pre-build metadata tool: finds `[[Serialize]]` fields in
//! header sources and renders reflection metadata for them.

/// Shared error types.
pub mod error;

/// Lexical struct/field extraction.
pub mod parser;

/// Header source discovery.
pub mod discovery;

/// Ordered accumulation of extracted descriptions.
pub mod metadata;

/// Output renderers.
pub mod backends;

pub use backends::{EnttMetaBackend, JsonBackend, MetadataBackend};
pub use discovery::{discover_sources, SourceUnit, DEFAULT_EXTENSION};
pub use error::{AppError, AppResult};
pub use metadata::MetadataSet;
pub use parser::{extract, StructDescription, SERIALIZE_MARKER};
