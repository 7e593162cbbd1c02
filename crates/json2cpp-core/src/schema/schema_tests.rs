#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const PERSON_SCHEMA: &str = r#"
{
    "metadata": { "namespace": "example" },
    "enums": [
        { "name": "EyeColor", "values": ["Blue", "Green", "Brown"] }
    ],
    "classes": [
        {
            "name": "Person",
            "attributes": [
                { "name": "name", "type": "std::string" },
                { "name": "age", "type": "int" },
                { "name": "body", "type": "Body" }
            ],
            "inner_structs": [
                {
                    "name": "Body",
                    "object_type": "Struct",
                    "attributes": [
                        { "name": "weight", "type": "double" },
                        { "name": "height", "type": "double" }
                    ],
                    "constraints": {
                        "weight": { "min": 0, "max": 500 },
                        "height": { "max": 3.0 }
                    }
                }
            ],
            "constraints": { "age": { "min": 0, "max": 150 } }
        }
    ]
}
"#;

// Loading

#[test]
fn Schema___from_json_str___parses_full_document() {
    let schema = Schema::from_json_str(PERSON_SCHEMA).unwrap();

    assert_eq!(schema.metadata.namespace, "example");
    assert_eq!(schema.enums.len(), 1);
    assert_eq!(schema.enums[0].values, vec!["Blue", "Green", "Brown"]);
    assert_eq!(schema.classes.len(), 1);

    let person = &schema.classes[0];
    assert_eq!(person.object_type, ObjectType::Class);
    assert_eq!(person.attributes[2], AttributeSpec::new("body", "Body"));

    let body = person.inner_struct("Body").unwrap();
    assert_eq!(body.object_type, ObjectType::Struct);
}

#[test]
fn Schema___from_json_str___keeps_constraint_order_and_spelling() {
    let schema = Schema::from_json_str(PERSON_SCHEMA).unwrap();
    let body = &schema.classes[0].inner_structs[0];

    let keys: Vec<&str> = body.constraints.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["weight", "height"]);

    let height = &body.constraints["height"];
    assert!(height.min.is_none());
    assert_eq!(height.max.as_ref().unwrap().to_string(), "3.0");
}

#[test]
fn Schema___from_json_str___empty_object_defaults_every_section() {
    let schema = Schema::from_json_str("{}").unwrap();

    assert_eq!(schema, Schema::default());
    assert_eq!(schema.metadata.namespace, "");
}

#[test]
fn Schema___from_json_str___null_metadata_defaults_to_empty_namespace() {
    let schema = Schema::from_json_str(r#"{"metadata": null, "classes": []}"#).unwrap();

    assert_eq!(schema.metadata, Metadata::default());
}

#[test]
fn Schema___from_json_str___legacy_enum_entries_become_enums() {
    let json = r#"{
        "enums": [ { "name": "Mood", "values": ["Happy"] } ],
        "classes": [
            { "name": "Color", "type": "enum", "values": ["Red", "Green"] },
            { "name": "Widget", "attributes": [ { "name": "color", "type": "Color" } ] }
        ]
    }"#;

    let schema = Schema::from_json_str(json).unwrap();

    let names: Vec<&str> = schema.enums.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Mood", "Color"]);
    assert_eq!(schema.classes.len(), 1);
    assert_eq!(schema.classes[0].name, "Widget");
}

#[test]
fn Schema___type_count___includes_nested_types() {
    let schema = Schema::from_json_str(PERSON_SCHEMA).unwrap();

    assert_eq!(schema.type_count(), 2);
}

// Load failures

#[test]
fn Schema___from_json_str___rejects_invalid_json() {
    let err = Schema::from_json_str("{ classes: ").unwrap_err();

    assert!(matches!(err, SchemaError::Json(_)));
}

#[test_case("[]", "an array")]
#[test_case("42", "a number")]
#[test_case("\"schema\"", "a string")]
#[test_case("null", "null")]
fn Schema___from_json_str___rejects_non_object_root(json: &str, kind: &str) {
    let err = Schema::from_json_str(json).unwrap_err();

    match err {
        SchemaError::NotAnObject(found) => assert_eq!(found, kind),
        other => panic!("expected NotAnObject, got {other:?}"),
    }
}

#[test]
fn Schema___from_json_str___reports_path_of_malformed_class() {
    let json = r#"{"classes": [ { "name": "Ok" }, { "name": "Bad", "attributes": [ { "name": "x" } ] } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    match err {
        SchemaError::Malformed { path, message } => {
            assert_eq!(path, "classes[1].attributes[0]");
            assert!(message.contains("type"));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn Schema___from_json_str___reports_path_of_malformed_section() {
    let err = Schema::from_json_str(r#"{"enums": {"name": "X"}}"#).unwrap_err();

    match err {
        SchemaError::Malformed { path, .. } => assert_eq!(path, "enums"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn Schema___from_json_str___rejects_unknown_object_type() {
    let json = r#"{"classes": [ { "name": "A", "object_type": "Union" } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchemaError::Malformed { .. }));
}

#[test]
fn Schema___load___missing_file_returns_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = Schema::load(&path).unwrap_err();

    assert!(matches!(err, SchemaError::Read { .. }));
}

#[test]
fn Schema___load___reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, PERSON_SCHEMA).unwrap();

    let schema = Schema::load(&path).unwrap();

    assert_eq!(schema.classes[0].name, "Person");
}

// Validation

#[test]
fn Schema___validate___rejects_duplicate_class_names() {
    let json = r#"{"classes": [ { "name": "A" }, { "name": "A" } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateType(name) if name == "A"));
}

#[test]
fn Schema___validate___rejects_class_named_like_enum() {
    let json = r#"{"enums": [ { "name": "A", "values": [] } ], "classes": [ { "name": "A" } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateType(_)));
}

#[test]
fn Schema___validate___rejects_duplicate_enum_values() {
    let json = r#"{"enums": [ { "name": "E", "values": ["X", "Y", "X"] } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(
        err,
        SchemaError::DuplicateEnumValue { ref enum_name, ref value } if enum_name == "E" && value == "X"
    ));
}

#[test]
fn Schema___validate___rejects_duplicate_inner_types_with_qualified_parent() {
    let json = r#"{"classes": [ { "name": "Outer", "inner_structs": [
        { "name": "Mid", "inner_structs": [ { "name": "Leaf" }, { "name": "Leaf" } ] }
    ] } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    match err {
        SchemaError::DuplicateInnerType { parent, name } => {
            assert_eq!(parent, "Outer::Mid");
            assert_eq!(name, "Leaf");
        }
        other => panic!("expected DuplicateInnerType, got {other:?}"),
    }
}

#[test]
fn Schema___validate___allows_same_inner_name_under_different_parents() {
    let json = r#"{"classes": [
        { "name": "A", "inner_structs": [ { "name": "Detail" } ] },
        { "name": "B", "inner_structs": [ { "name": "Detail" } ] }
    ]}"#;

    assert!(Schema::from_json_str(json).is_ok());
}

#[test]
fn Schema___validate___rejects_duplicate_attributes() {
    let json = r#"{"classes": [ { "name": "A", "attributes": [
        { "name": "x", "type": "int" }, { "name": "x", "type": "double" }
    ] } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateAttribute { .. }));
}

#[test]
fn Schema___validate___rejects_constraint_on_unknown_attribute() {
    let json = r#"{"classes": [ { "name": "A",
        "attributes": [ { "name": "x", "type": "int" } ],
        "constraints": { "y": { "min": 1 } }
    } ]}"#;

    let err = Schema::from_json_str(json).unwrap_err();

    assert!(matches!(
        err,
        SchemaError::UnknownConstraintAttribute { ref attribute, .. } if attribute == "y"
    ));
}

#[test_case("ex-ample")]
#[test_case("::example")]
#[test_case("a::::b")]
#[test_case("1st")]
fn Schema___validate___rejects_bad_namespace(namespace: &str) {
    let schema = Schema {
        metadata: Metadata {
            namespace: namespace.to_string(),
        },
        ..Schema::default()
    };

    assert!(matches!(
        schema.validate(),
        Err(SchemaError::InvalidNamespace(_))
    ));
}

#[test]
fn Schema___validate___accepts_nested_namespace() {
    let schema = Schema {
        metadata: Metadata {
            namespace: "company::model".to_string(),
        },
        ..Schema::default()
    };

    assert!(schema.validate().is_ok());
}

#[test]
fn Schema___validate___rejects_non_identifier_class_name() {
    let mut schema = Schema::default();
    schema.classes.push(ClassSpec::new("my class"));

    assert!(matches!(
        schema.validate(),
        Err(SchemaError::InvalidIdentifier { kind: "class", .. })
    ));
}

// Identifiers

#[test_case("Person", true)]
#[test_case("_private", true)]
#[test_case("snake_case_9", true)]
#[test_case("", false)]
#[test_case("9lives", false)]
#[test_case("has space", false)]
#[test_case("std::string", false)]
fn is_identifier___classifies(name: &str, expected: bool) {
    assert_eq!(is_identifier(name), expected);
}

#[test]
fn ObjectType___default___is_class_with_accessors() {
    assert_eq!(ObjectType::default(), ObjectType::Class);
    assert!(ObjectType::Class.has_accessors());
    assert!(!ObjectType::Struct.has_accessors());
    assert_eq!(ObjectType::Struct.keyword(), "struct");
}
