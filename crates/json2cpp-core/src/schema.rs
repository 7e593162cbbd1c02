//! Schema model loaded from the JSON input document.
//!
//! The model is built once per run and never mutated afterwards. Loading
//! happens in two steps: the document is deserialized section by section
//! (with JSON paths in error messages), then [`Schema::validate`] checks the
//! invariants the emitters rely on (unique names, known constraint targets).
//!
//! # Document shape
//!
//! ```json
//! {
//!   "metadata": { "namespace": "example" },
//!   "enums": [ { "name": "EyeColor", "values": ["Blue", "Green"] } ],
//!   "classes": [
//!     {
//!       "name": "Person",
//!       "object_type": "Class",
//!       "attributes": [ { "name": "age", "type": "int" } ],
//!       "inner_structs": [],
//!       "constraints": { "age": { "min": 0, "max": 150 } }
//!     }
//!   ]
//! }
//! ```
//!
//! Every section is optional. Entries of `classes` tagged `"type": "enum"`
//! are read as enums, which keeps older schema files working.

use crate::error::{SchemaError, SchemaResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Document-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Enclosing namespace for all generated code (empty means none).
    #[serde(default)]
    pub namespace: String,
}

/// An enumeration with ordered, unique values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumSpec {
    pub name: String,

    #[serde(default)]
    pub values: Vec<String>,
}

/// Whether a type is emitted as a `class` (with accessors) or a plain `struct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    Class,
    Struct,
}

impl ObjectType {
    /// The C++ class-key for this object type.
    pub fn keyword(self) -> &'static str {
        match self {
            ObjectType::Class => "class",
            ObjectType::Struct => "struct",
        }
    }

    /// Whether getter/setter pairs are generated.
    pub fn has_accessors(self) -> bool {
        matches!(self, ObjectType::Class)
    }
}

/// A named, typed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,

    /// Type reference, resolved by [`SchemaIndex::classify`](crate::SchemaIndex::classify).
    #[serde(rename = "type")]
    pub type_ref: String,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
        }
    }
}

/// Inclusive numeric bounds on one attribute.
///
/// Bounds keep their JSON spelling so `1.75` is emitted as `1.75`, not as a
/// re-rendered float.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<serde_json::Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_json::Number>,
}

impl ConstraintSpec {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A class or struct, possibly with nested inner types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub name: String,

    #[serde(default)]
    pub object_type: ObjectType,

    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,

    #[serde(default)]
    pub inner_structs: Vec<ClassSpec>,

    /// Constraints in document order.
    #[serde(default)]
    pub constraints: IndexMap<String, ConstraintSpec>,
}

impl ClassSpec {
    /// Create an empty class with the default object type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_type: ObjectType::default(),
            attributes: Vec::new(),
            inner_structs: Vec::new(),
            constraints: IndexMap::new(),
        }
    }

    /// Find a direct inner type by name (not transitive).
    pub fn inner_struct(&self, name: &str) -> Option<&ClassSpec> {
        self.inner_structs.iter().find(|inner| inner.name == name)
    }

    /// Find an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// A complete schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub metadata: Metadata,
    pub enums: Vec<EnumSpec>,
    pub classes: Vec<ClassSpec>,
}

/// Top-level sections as they appear in the document.
#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    metadata: Option<Metadata>,

    #[serde(default)]
    enums: Vec<EnumSpec>,

    #[serde(default)]
    classes: Vec<serde_json::Value>,
}

impl Schema {
    /// Read, parse, and validate a schema file.
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Parse and validate a schema from JSON text.
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build and validate a schema from an already parsed JSON document.
    pub fn from_value(value: serde_json::Value) -> SchemaResult<Self> {
        if !value.is_object() {
            return Err(SchemaError::NotAnObject(json_kind(&value)));
        }

        let raw: RawSchema = serde_path_to_error::deserialize(value)?;

        let mut enums = raw.enums;
        let mut classes = Vec::with_capacity(raw.classes.len());

        for (index, entry) in raw.classes.into_iter().enumerate() {
            if is_legacy_enum(&entry) {
                let spec: EnumSpec = serde_path_to_error::deserialize(entry)
                    .map_err(|err| malformed_at(&format!("classes[{index}]"), err))?;
                enums.push(spec);
            } else {
                let spec: ClassSpec = serde_path_to_error::deserialize(entry)
                    .map_err(|err| malformed_at(&format!("classes[{index}]"), err))?;
                classes.push(spec);
            }
        }

        let schema = Schema {
            metadata: raw.metadata.unwrap_or_default(),
            enums,
            classes,
        };
        schema.validate()?;

        Ok(schema)
    }

    /// Check the invariants every emitter relies on.
    pub fn validate(&self) -> SchemaResult<()> {
        let namespace = &self.metadata.namespace;
        if !namespace.is_empty() && !namespace.split("::").all(is_identifier) {
            return Err(SchemaError::InvalidNamespace(namespace.clone()));
        }

        let mut top_level = HashSet::new();

        for spec in &self.enums {
            check_identifier("enum", &spec.name)?;
            if !top_level.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateType(spec.name.clone()));
            }

            let mut seen = HashSet::new();
            for value in &spec.values {
                check_identifier("enum value", value)?;
                if !seen.insert(value.as_str()) {
                    return Err(SchemaError::DuplicateEnumValue {
                        enum_name: spec.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        for spec in &self.classes {
            if !top_level.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateType(spec.name.clone()));
            }
            validate_class(spec, &spec.name)?;
        }

        Ok(())
    }

    /// Number of class/struct definitions, inner types included.
    pub fn type_count(&self) -> usize {
        fn count(spec: &ClassSpec) -> usize {
            1 + spec.inner_structs.iter().map(count).sum::<usize>()
        }
        self.classes.iter().map(count).sum()
    }
}

fn validate_class(spec: &ClassSpec, qualified: &str) -> SchemaResult<()> {
    check_identifier("class", &spec.name)?;

    let mut attributes = HashSet::new();
    for attr in &spec.attributes {
        check_identifier("attribute", &attr.name)?;
        if !attributes.insert(attr.name.as_str()) {
            return Err(SchemaError::DuplicateAttribute {
                owner: qualified.to_string(),
                name: attr.name.clone(),
            });
        }
    }

    for attribute in spec.constraints.keys() {
        if !attributes.contains(attribute.as_str()) {
            return Err(SchemaError::UnknownConstraintAttribute {
                owner: qualified.to_string(),
                attribute: attribute.clone(),
            });
        }
    }

    let mut inner_names = HashSet::new();
    for inner in &spec.inner_structs {
        if !inner_names.insert(inner.name.as_str()) {
            return Err(SchemaError::DuplicateInnerType {
                parent: qualified.to_string(),
                name: inner.name.clone(),
            });
        }
        validate_class(inner, &format!("{qualified}::{}", inner.name))?;
    }

    Ok(())
}

/// Whether `name` is a plain C-style identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn check_identifier(kind: &'static str, name: &str) -> SchemaResult<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}

fn is_legacy_enum(entry: &serde_json::Value) -> bool {
    entry.get("type").and_then(serde_json::Value::as_str) == Some("enum")
}

fn malformed_at<E: std::fmt::Display>(prefix: &str, err: serde_path_to_error::Error<E>) -> SchemaError {
    let inner_path = err.path().to_string();
    let path = if inner_path == "." {
        prefix.to_string()
    } else {
        format!("{prefix}.{inner_path}")
    };

    SchemaError::Malformed {
        path,
        message: err.inner().to_string(),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
