#![deny(missing_docs)]

//! # entt Backend
//!
//! Emits a C++ header defining `RegisterMeta()`, which registers every
//! serialized field with the entt meta system. Each data member carries its
//! own name as a `std::string` custom property so editors can label it.

use crate::backends::MetadataBackend;
use crate::error::AppResult;
use crate::metadata::MetadataSet;
use crate::parser::StructDescription;

const PREAMBLE: &str = "// Generated by prebuild-tool. Do not edit.\n\
#pragma once\n\
\n\
#include <string>\n\
#include <entt/entt.hpp>\n\
\n";

/// Renders descriptions as entt `meta_factory` registrations.
#[derive(Debug, Clone, Default)]
pub struct EnttMetaBackend {
    namespace: Option<String>,
}

impl EnttMetaBackend {
    /// Creates a backend emitting `RegisterMeta()` at global scope, or inside
    /// `namespace` when one is given. An empty namespace counts as none.
    pub fn new(namespace: Option<String>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.trim().is_empty()),
        }
    }
}

impl MetadataBackend for EnttMetaBackend {
    fn name(&self) -> &'static str {
        "entt"
    }

    fn render(&self, set: &MetadataSet) -> AppResult<String> {
        let mut code = String::from(PREAMBLE);

        let (outer, inner) = match &self.namespace {
            Some(ns) => {
                code.push_str(&format!("namespace {}\n{{\n", ns));
                ("    ", "        ")
            }
            None => ("", "    "),
        };

        code.push_str(&format!("{outer}inline void RegisterMeta()\n{outer}{{\n"));
        code.push_str(&format!("{inner}using namespace entt::literals;\n"));

        for description in set {
            code.push('\n');
            code.push_str(&render_registration(description, inner));
        }

        code.push_str(&format!("{outer}}}\n"));
        if self.namespace.is_some() {
            code.push_str("}\n");
        }

        Ok(code)
    }
}

/// One `meta_factory` chain. The recorded type of each field goes in a
/// comment above its `.data` call; the chain's last call takes the `;`.
fn render_registration(description: &StructDescription, indent: &str) -> String {
    let name = &description.name;
    let mut calls = vec![(None, format!(".type(\"{}\"_hs)", name))];

    for (field, ty) in description.serialized_with_types() {
        calls.push((
            Some(ty.unwrap_or("unknown")),
            format!(
                ".data<&{name}::{field}>(\"{field}\"_hs).custom<std::string>(\"{field}\")"
            ),
        ));
    }

    let mut code = format!("{indent}entt::meta_factory<{name}>()\n");
    let last = calls.len() - 1;
    for (i, (ty, call)) in calls.iter().enumerate() {
        if let Some(ty) = ty {
            code.push_str(&format!("{indent}    // {ty}\n"));
        }
        let terminator = if i == last { ";" } else { "" };
        code.push_str(&format!("{indent}    {call}{terminator}\n"));
    }
    code
}
