//! json2cpp-core - Schema model, validation, and type resolution
//!
//! This crate provides the foundational types shared by every json2cpp stage:
//! - [`Schema`] and its parts ([`EnumSpec`], [`ClassSpec`], ...) loaded from JSON
//! - [`SchemaIndex`] with the single [`TypeCategory`] classifier used by all emitters
//! - [`SchemaError`] for load and validation failures
//! - [`LogLevel`] shared by the logging crate and the CLI

mod error;
mod resolve;
mod schema;

pub use error::{SchemaError, SchemaResult};
pub use resolve::{PrimitiveKind, SchemaIndex, TypeCategory};
pub use schema::{
    AttributeSpec, ClassSpec, ConstraintSpec, EnumSpec, Metadata, ObjectType, Schema,
    is_identifier,
};

use std::str::FromStr;

/// Log levels understood by the CLI and the logging crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Lowercase name, as accepted by `RUST_LOG` style directives
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(format!(
                "unknown log level '{other}' (expected trace, debug, info, warn, error or off)"
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}
