//! # Data Models
//!
//! Records produced by the declaration extractor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The literal attribute token that flags a field for serialization.
pub const SERIALIZE_MARKER: &str = "[[Serialize]]";

/// One `struct Name { ... };` span found by the boundary scan.
///
/// `body` is everything between the opening brace and the first closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationBody<'a> {
    /// The aggregate name.
    pub name: &'a str,
    /// The raw body text.
    pub body: &'a str,
}

/// A single field declaration matched inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// The field name.
    pub name: String,
    /// The raw, trimmed type expression (e.g. `std::vector<Entity>`, `Node *`).
    pub ty: String,
    /// Whether the serialize marker preceded the declaration.
    pub serialized: bool,
}

/// Serialization metadata for one struct declaration.
///
/// Descriptions are never merged: two declarations sharing a name produce
/// two descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDescription {
    /// The struct name.
    pub name: String,
    /// Marked fields in textual order. Repeats are kept.
    pub serialized_fields: Vec<String>,
    /// Type of every recognized field, marked or not. Last declaration wins.
    pub field_types: IndexMap<String, String>,
}

impl StructDescription {
    /// Creates an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Records a matched field.
    pub fn record(&mut self, field: FieldDecl) {
        if field.serialized {
            self.serialized_fields.push(field.name.clone());
        }
        self.field_types.insert(field.name, field.ty);
    }

    /// Looks up the recorded type of a field.
    pub fn field_type(&self, field: &str) -> Option<&str> {
        self.field_types.get(field).map(String::as_str)
    }

    /// True when at least one field carries the serialize marker.
    pub fn has_serialized_fields(&self) -> bool {
        !self.serialized_fields.is_empty()
    }

    /// Serialized fields paired with their recorded types.
    pub fn serialized_with_types(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.serialized_fields
            .iter()
            .map(|f| (f.as_str(), self.field_type(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str, serialized: bool) -> FieldDecl {
        FieldDecl {
            name: name.into(),
            ty: ty.into(),
            serialized,
        }
    }

    #[test]
    fn test_record_last_type_wins() {
        let mut s = StructDescription::new("S");
        s.record(field("x", "int", true));
        s.record(field("y", "int", false));
        s.record(field("x", "float", false));

        assert_eq!(s.serialized_fields, vec!["x"]);
        assert_eq!(s.field_type("x"), Some("float"));
        assert_eq!(s.field_type("y"), Some("int"));
        // Overwrite keeps the original insertion slot
        assert_eq!(s.field_types.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_repeated_marker_is_kept() {
        let mut s = StructDescription::new("S");
        s.record(field("x", "int", true));
        s.record(field("x", "int", true));
        assert_eq!(s.serialized_fields, vec!["x", "x"]);
        assert_eq!(s.field_types.len(), 1);
    }

    #[test]
    fn test_unmarked_only() {
        let mut s = StructDescription::new("S");
        s.record(field("y", "int", false));
        assert!(!s.has_serialized_fields());
    }

    #[test]
    fn test_serde_field_names() {
        let mut s = StructDescription::new("Name");
        s.record(field("EntityName", "std::string", true));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["name"], "Name");
        assert_eq!(json["serializedFields"][0], "EntityName");
        assert_eq!(json["fieldTypes"]["EntityName"], "std::string");
    }
}
