//! # Extraction Logic
//!
//! Two-stage lexical scan turning header text into [`StructDescription`]s.
//!
//! 1. **Boundary detection**: `struct <Name> { <body> };` where the body ends at
//!    the *first* `}`. There is no brace-depth tracking, so a nested block cuts
//!    the body short at its own closing brace.
//! 2. **Field matching**: inside each body, leftmost-first matches of
//!    `[[Serialize]]? <type> <name> (= <default>)? ;`.
//!
//! Neither stage reports errors. Text that does not fit the shapes above is
//! skipped.

use crate::parser::models::{DeclarationBody, FieldDecl, StructDescription, SERIALIZE_MARKER};
use crate::parser::scanner::{
    is_ident_char, is_indirection, is_type_char, next_char_boundary, Cursor,
};
use tracing::{debug, trace};

/// Extracts every struct carrying at least one `[[Serialize]]` field.
///
/// Descriptions are returned in declaration order. Structs without marked
/// fields are dropped entirely.
///
/// # Examples
/// ```
/// use prebuild_core::parser::extract;
///
/// let code = r#"
///     struct Hierarchy
///     {
///         [[Serialize]]
///         Entity Parent = NullEntity;
///         [[Serialize]]
///         std::vector<Entity> Children;
///         int Depth;
///     };
/// "#;
/// let structs = extract(code);
/// assert_eq!(structs.len(), 1);
/// assert_eq!(structs[0].serialized_fields, vec!["Parent", "Children"]);
/// assert_eq!(structs[0].field_type("Children"), Some("std::vector<Entity>"));
/// assert_eq!(structs[0].field_type("Depth"), Some("int"));
/// ```
pub fn extract(text: &str) -> Vec<StructDescription> {
    extract_declarations(text)
        .into_iter()
        .filter_map(|decl| {
            let mut description = StructDescription::new(decl.name);
            for field in extract_fields(decl.body) {
                description.record(field);
            }

            if description.has_serialized_fields() {
                debug!(
                    name = %description.name,
                    serialized = description.serialized_fields.len(),
                    typed = description.field_types.len(),
                    "extracted struct"
                );
                Some(description)
            } else {
                trace!(name = decl.name, "skipping struct without serialized fields");
                None
            }
        })
        .collect()
}

/// Stage 1: finds all non-overlapping `struct <Name> { <body> };` spans.
pub fn extract_declarations(text: &str) -> Vec<DeclarationBody<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find("struct") {
        let start = pos + offset;
        match match_declaration_at(text, start) {
            Some((decl, end)) => {
                found.push(decl);
                pos = end;
            }
            None => pos = next_char_boundary(text, start),
        }
    }

    found
}

/// Stage 2: finds all field declarations inside one body, in textual order.
pub fn extract_fields(body: &str) -> Vec<FieldDecl> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < body.len() {
        match match_field_at(body, pos) {
            Some((field, end)) => {
                trace!(field = %field.name, ty = %field.ty, serialized = field.serialized, "matched field");
                fields.push(field);
                pos = end;
            }
            None => pos = next_char_boundary(body, pos),
        }
    }

    fields
}

/// Attempts `struct\s+(\w+)\s*\{([^}]+)\};` anchored at `start`.
fn match_declaration_at(text: &str, start: usize) -> Option<(DeclarationBody<'_>, usize)> {
    let mut cursor = Cursor::at(text, start);

    if !cursor.eat_str("struct") || cursor.skip_whitespace() == 0 {
        return None;
    }

    let name = cursor.take_while(is_ident_char);
    if name.is_empty() {
        return None;
    }

    cursor.skip_whitespace();
    if !cursor.eat_char('{') {
        return None;
    }

    let body_start = cursor.pos();
    let close = cursor.find_char('}')?;
    if close == body_start {
        return None;
    }

    cursor.jump_to(close);
    cursor.eat_char('}');
    if !cursor.eat_char(';') {
        return None;
    }

    let body = cursor.slice(body_start, close);
    Some((DeclarationBody { name, body }, cursor.pos()))
}

/// Attempts a field declaration anchored at `start`.
///
/// Alternatives are tried in the same preference order a backtracking matcher
/// would use: with the marker before without, with an indirection suffix
/// before without. Every other part of the shape is deterministic because
/// adjacent parts draw from disjoint character classes.
fn match_field_at(body: &str, start: usize) -> Option<(FieldDecl, usize)> {
    let marker_options: &[bool] = if body[start..].starts_with(SERIALIZE_MARKER) {
        &[true, false]
    } else {
        &[false]
    };

    for &serialized in marker_options {
        let mut cursor = Cursor::at(body, start);
        if serialized {
            cursor.eat_str(SERIALIZE_MARKER);
        }
        cursor.skip_whitespace();

        let ty_start = cursor.pos();
        if cursor.take_while(is_type_char).is_empty() {
            continue;
        }
        let base_end = cursor.pos();

        let mut suffixed = cursor;
        suffixed.skip_whitespace();
        let suffix_end = suffixed
            .peek()
            .filter(|&c| is_indirection(c))
            .map(|c| suffixed.pos() + c.len_utf8());

        for ty_end in suffix_end.into_iter().chain(Some(base_end)) {
            if let Some((name, end)) = match_name_and_terminator(body, ty_end) {
                let field = FieldDecl {
                    name: name.to_string(),
                    ty: body[ty_start..ty_end].trim().to_string(),
                    serialized,
                };
                return Some((field, end));
            }
        }
    }

    None
}

/// Matches `\s+(\w+)\s*(?:=\s*[^;]+)?;` at `from`, returning the name and the
/// offset just past the terminator.
fn match_name_and_terminator(body: &str, from: usize) -> Option<(&str, usize)> {
    let mut cursor = Cursor::at(body, from);
    if cursor.skip_whitespace() == 0 {
        return None;
    }

    let name = cursor.take_while(is_ident_char);
    if name.is_empty() {
        return None;
    }

    cursor.skip_whitespace();
    if cursor.eat_char(';') {
        return Some((name, cursor.pos()));
    }

    if cursor.eat_char('=') {
        // The default value is opaque but must be non-empty.
        let value_start = cursor.pos();
        let semi = cursor.find_char(';')?;
        if semi == value_start {
            return None;
        }
        return Some((name, semi + 1));
    }

    None
}
