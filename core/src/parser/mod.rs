#![deny(missing_docs)]

//! # Parser Module
//!
//! Lexical extraction of `[[Serialize]]` metadata from header text.
//! Locates `struct` declarations, matches field declarations inside their
//! bodies and records which fields are flagged for serialization.

pub mod extractors;
pub mod models;
pub mod scanner;

pub use extractors::{extract, extract_declarations, extract_fields};
pub use models::{DeclarationBody, FieldDecl, StructDescription, SERIALIZE_MARKER};
