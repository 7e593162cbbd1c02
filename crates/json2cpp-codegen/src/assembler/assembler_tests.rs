#![allow(non_snake_case)]

use super::*;

fn names() -> ArtifactNames {
    ArtifactNames::new("example_classes.h", "example.json")
}

fn generate_from(json: &str) -> GeneratedFiles {
    let schema = Schema::from_json_str(json).unwrap();
    generate(&schema, &names())
}

const SMALL: &str = r#"
{
    "metadata": { "namespace": "example" },
    "enums": [ { "name": "Mood", "values": ["Happy", "Sad"] } ],
    "classes": [
        { "name": "Person", "attributes": [ { "name": "mood", "type": "Mood" } ] }
    ]
}
"#;

#[test]
fn generate___header_starts_with_banner_and_guard() {
    let files = generate_from(SMALL);

    assert!(files.header.starts_with(
        "// Auto-generated by json2cpp\n\
         // Source: example.json\n\
         // DO NOT EDIT - regenerate with: json2cpp --schema example.json\n\
         \n\
         #pragma once\n\
         \n\
         #include <cstdint>\n\
         #include <memory>\n\
         #include <stdexcept>\n\
         #include <string>\n\
         #include <vector>\n\
         #include <rapidjson/document.h>\n\
         \n\
         namespace example {\n\
         \n\
         template <typename E>\n\
         E from_string(const std::string& str);\n"
    ));
    assert!(files.header.ends_with("};\n\n} // namespace example\n"));
}

#[test]
fn generate___header_orders_enums_forwards_classes() {
    let files = generate_from(SMALL);
    let header = &files.header;

    let template = header.find("template <typename E>").unwrap();
    let enum_pos = header.find("enum class Mood").unwrap();
    let forward = header.find("class Person;").unwrap();
    let body = header.find("class Person {").unwrap();

    assert!(template < enum_pos);
    assert!(enum_pos < forward);
    assert!(forward < body);
}

#[test]
fn generate___source_includes_header_and_orders_converters_first() {
    let files = generate_from(SMALL);
    let source = &files.source;

    assert!(source.contains("\n#include \"example_classes.h\"\n\nnamespace example {\n\n"));
    let converter = source.find("std::string to_string(Mood value)").unwrap();
    let class = source.find("// Person implementation").unwrap();
    assert!(converter < class);
    assert!(source.ends_with("} // namespace example\n"));
}

#[test]
fn generate___empty_namespace___no_namespace_block() {
    let files = generate_from(r#"{ "classes": [ { "name": "Point" } ] }"#);

    assert!(!files.header.contains("namespace"));
    assert!(!files.source.contains("namespace"));
    assert!(files.header.contains("class Point;\n\nclass Point {\n"));
}

#[test]
fn generate___no_enums___no_from_string_template() {
    let files = generate_from(r#"{ "classes": [ { "name": "Point" } ] }"#);

    assert!(!files.header.contains("from_string"));
}

#[test]
fn generate___empty_schema___empty_namespace_block() {
    let files = generate_from(r#"{ "metadata": { "namespace": "a::b" } }"#);

    assert!(files.header.ends_with("namespace a::b {\n\n} // namespace a::b\n"));
    assert!(files.source.ends_with("namespace a::b {\n\n} // namespace a::b\n"));
    assert!(files.report.is_clean());
}

#[test]
fn generate___carries_report() {
    let files = generate_from(
        r#"{ "classes": [ { "name": "Family", "attributes": [
            { "name": "children", "type": "std::vector<Family>" }
        ] } ] }"#,
    );

    assert_eq!(files.report.unhandled.len(), 1);
    assert!(files.header.contains("std::vector<Family> children{};"));
}

#[test]
fn generate___same_input___identical_output() {
    let first = generate_from(SMALL);
    let second = generate_from(SMALL);

    assert_eq!(first, second);
}
