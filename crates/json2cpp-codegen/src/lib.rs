//! C++ code generation from json2cpp schemas.
//!
//! Takes a validated [`Schema`](json2cpp_core::Schema) and renders a
//! declarations file and an implementation file targeting C++17 and
//! RapidJSON.
//!
//! # Architecture
//!
//! ```text
//! Schema ──> SchemaIndex (classify)
//!               │
//!               ├─→ [declarations]   → enums, forward decls, class bodies
//!               ├─→ [implementation] → converters, ctors, accessors, fromJson/toJson/validate
//!               └─→ [report]         → unhandled attributes, reference cycles
//!                        │
//!                  [assembler] → GeneratedFiles { header, source, report }
//! ```
//!
//! Every stage asks the same [`SchemaIndex::classify`](json2cpp_core::SchemaIndex::classify)
//! for an attribute's category, so a field is always declared and
//! (de)serialized consistently.
//!
//! # Usage
//!
//! ```
//! use json2cpp_codegen::{ArtifactNames, generate};
//! use json2cpp_core::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "metadata": { "namespace": "demo" },
//!     "classes": [ { "name": "Point", "object_type": "Struct", "attributes": [
//!         { "name": "x", "type": "double" }, { "name": "y", "type": "double" }
//!     ] } ]
//! }"#).unwrap();
//!
//! let files = generate(&schema, &ArtifactNames::new("point.h", "point.json"));
//! assert!(files.header.contains("struct Point {"));
//! assert!(files.source.contains("#include \"point.h\""));
//! assert!(files.report.is_clean());
//! ```

pub mod assembler;
pub mod cpp;
pub mod declarations;
pub mod implementation;
pub mod naming;
pub mod report;

pub use assembler::{ArtifactNames, GeneratedFiles, generate};
pub use report::{GenerationReport, UnhandledAttribute, UnhandledReason};
