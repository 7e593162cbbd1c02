//! Error types for schema loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while loading or validating a schema document
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read
    #[error("failed to read schema {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid JSON
    #[error("schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is not a JSON object
    #[error("schema root must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A section has the wrong shape
    #[error("malformed schema at {path}: {message}")]
    Malformed { path: String, message: String },

    /// A type, attribute or enum value name is not a C++ identifier
    #[error("{kind} name {name:?} is not a valid identifier")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// The metadata namespace is not a `::`-separated identifier path
    #[error("namespace {0:?} is not a valid namespace path")]
    InvalidNamespace(String),

    /// Two top-level types (classes or enums) share a name
    #[error("duplicate top-level type name: {0}")]
    DuplicateType(String),

    /// An enum declares the same value twice
    #[error("enum {enum_name} declares value {value} more than once")]
    DuplicateEnumValue { enum_name: String, value: String },

    /// A class declares two inner types with the same name
    #[error("{parent} declares inner type {name} more than once")]
    DuplicateInnerType { parent: String, name: String },

    /// A class declares two attributes with the same name
    #[error("{owner} declares attribute {name} more than once")]
    DuplicateAttribute { owner: String, name: String },

    /// A constraint names an attribute the class does not declare
    #[error("{owner} has a constraint on unknown attribute {attribute}")]
    UnknownConstraintAttribute { owner: String, attribute: String },
}

impl<E> From<serde_path_to_error::Error<E>> for SchemaError
where
    E: std::fmt::Display,
{
    fn from(err: serde_path_to_error::Error<E>) -> Self {
        SchemaError::Malformed {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
