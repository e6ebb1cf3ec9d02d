use pretty_assertions::assert_eq;
use prebuild_core::{
    discover_sources, extract, JsonBackend, MetadataBackend, MetadataSet, StructDescription,
    DEFAULT_EXTENSION,
};
use std::fs;

const COMPONENTS: &str = r#"#pragma once

namespace Neo
{
    struct Name
    {
        [[Serialize]]
        std::string EntityName;
    };

    struct Transform
    {
        [[Serialize]]
        glm::vec3 Position;
        [[Serialize]]
        glm::vec3 Rotation;
        [[Serialize]]
        glm::vec3 Scale;
    };

    struct Hierarchy
    {
        [[Serialize]]
        Entity Parent = NullEntity;
        [[Serialize]]
        std::vector<Entity> Children;
    };

    struct RuntimeOnly
    {
        u32 Generation;
        bool Dirty = false;
    };
}
"#;

fn description(name: &str, serialized: &[&str], types: &[(&str, &str)]) -> StructDescription {
    let mut d = StructDescription::new(name);
    d.serialized_fields = serialized.iter().map(|s| s.to_string()).collect();
    d.field_types = types
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    d
}

#[test]
fn test_component_header() {
    let structs = extract(COMPONENTS);

    assert_eq!(
        structs,
        vec![
            description("Name", &["EntityName"], &[("EntityName", "std::string")]),
            description(
                "Transform",
                &["Position", "Rotation", "Scale"],
                &[
                    ("Position", "glm::vec3"),
                    ("Rotation", "glm::vec3"),
                    ("Scale", "glm::vec3"),
                ],
            ),
            description(
                "Hierarchy",
                &["Parent", "Children"],
                &[("Parent", "Entity"), ("Children", "std::vector<Entity>")],
            ),
        ]
    );
}

#[test]
fn test_nested_block_truncates_body() {
    let code = r#"
struct Material
{
    [[Serialize]]
    float Roughness;
    union { float Packed; int Bits; } Storage;
    [[Serialize]]
    float Metallic;
};
"#;
    // The body stops at the union's closing brace, which is not followed by
    // `;`, so the whole declaration fails to match.
    assert!(extract(code).is_empty());

    let code = r#"
struct Material
{
    [[Serialize]]
    float Roughness;
    struct Inner { int Bits; };
    [[Serialize]]
    float Metallic;
};
"#;
    let structs = extract(code);
    assert_eq!(structs.len(), 1);
    assert_eq!(structs[0].name, "Material");
    assert_eq!(structs[0].serialized_fields, vec!["Roughness"]);
    assert_eq!(structs[0].field_type("Metallic"), None);
}

#[test]
fn test_unmarked_fields_are_typed_but_not_serialized() {
    let code = "struct Light { [[Serialize]] float Intensity; glm::vec3* Target; Camera& Owner; };";
    let structs = extract(code);
    assert_eq!(structs[0].serialized_fields, vec!["Intensity"]);
    assert_eq!(structs[0].field_type("Target"), Some("glm::vec3*"));
    assert_eq!(structs[0].field_type("Owner"), Some("Camera&"));
}

#[test]
fn test_directory_pipeline_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let core = dir.path().join("Core");
    fs::create_dir_all(&core).unwrap();
    fs::write(core.join("Components.hpp"), COMPONENTS).unwrap();
    fs::write(
        dir.path().join("Extra.hpp"),
        "struct Name { [[Serialize]] std::string Alias; };",
    )
    .unwrap();
    fs::write(
        dir.path().join("Ignored.cpp"),
        "struct Skipped { [[Serialize]] int x; };",
    )
    .unwrap();

    let units = discover_sources(dir.path(), DEFAULT_EXTENSION).unwrap();
    assert_eq!(units.len(), 2);

    let set = MetadataSet::from_sources(&units);
    let names: Vec<_> = set.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Name", "Transform", "Hierarchy", "Name"]);
    assert_eq!(set.find("Name").count(), 2);
    assert_eq!(set.find("Skipped").count(), 0);

    let rendered = JsonBackend.render(&set).unwrap();
    let parsed: Vec<StructDescription> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, set.into_inner());
}
