//! Type resolution for attribute type references.
//!
//! Every emitter asks [`SchemaIndex::classify`] what an attribute's type is
//! and branches on the returned [`TypeCategory`]. Keeping the decision in one
//! place means the declaration and the implementation of a type can never
//! disagree about how a field is stored.
//!
//! # Precedence
//!
//! | Order | Category | Matches |
//! |-------|----------|---------|
//! | 1 | [`TypeCategory::Primitive`] | a whitelisted scalar spelling |
//! | 2 | [`TypeCategory::ClassRef`] | a top-level schema class |
//! | 3 | [`TypeCategory::InlineStruct`] | an inner type of the enclosing class |
//! | 4 | [`TypeCategory::EnumRef`] | a schema enum |
//! | 5 | [`TypeCategory::Unresolved`] | anything else |
//!
//! A top-level class keeps its shared-handle storage even when the enclosing
//! class also has an inner type of the same name.

use crate::schema::{ClassSpec, EnumSpec, Schema};
use std::collections::BTreeMap;

/// Scalar kinds the generated (de)serializers handle directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Text,
    Bool,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
}

/// Type mapping from a C++ spelling to its primitive kind
struct PrimitiveMapping {
    spelling: &'static str,
    kind: PrimitiveKind,
}

const PRIMITIVE_MAPPINGS: &[PrimitiveMapping] = &[
    PrimitiveMapping {
        spelling: "std::string",
        kind: PrimitiveKind::Text,
    },
    PrimitiveMapping {
        spelling: "bool",
        kind: PrimitiveKind::Bool,
    },
    PrimitiveMapping {
        spelling: "int",
        kind: PrimitiveKind::Int32,
    },
    PrimitiveMapping {
        spelling: "int32_t",
        kind: PrimitiveKind::Int32,
    },
    PrimitiveMapping {
        spelling: "std::int32_t",
        kind: PrimitiveKind::Int32,
    },
    PrimitiveMapping {
        spelling: "unsigned",
        kind: PrimitiveKind::Uint32,
    },
    PrimitiveMapping {
        spelling: "unsigned int",
        kind: PrimitiveKind::Uint32,
    },
    PrimitiveMapping {
        spelling: "uint32_t",
        kind: PrimitiveKind::Uint32,
    },
    PrimitiveMapping {
        spelling: "std::uint32_t",
        kind: PrimitiveKind::Uint32,
    },
    PrimitiveMapping {
        spelling: "int64_t",
        kind: PrimitiveKind::Int64,
    },
    PrimitiveMapping {
        spelling: "std::int64_t",
        kind: PrimitiveKind::Int64,
    },
    PrimitiveMapping {
        spelling: "uint64_t",
        kind: PrimitiveKind::Uint64,
    },
    PrimitiveMapping {
        spelling: "std::uint64_t",
        kind: PrimitiveKind::Uint64,
    },
    PrimitiveMapping {
        spelling: "float",
        kind: PrimitiveKind::Float,
    },
    PrimitiveMapping {
        spelling: "double",
        kind: PrimitiveKind::Double,
    },
];

impl PrimitiveKind {
    /// Look up a whitelisted spelling.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        PRIMITIVE_MAPPINGS
            .iter()
            .find(|m| m.spelling == spelling)
            .map(|m| m.kind)
    }

    /// RapidJSON type predicate guarding deserialization (e.g. `IsString`).
    pub fn json_guard(self) -> &'static str {
        match self {
            PrimitiveKind::Text => "IsString",
            PrimitiveKind::Bool => "IsBool",
            PrimitiveKind::Int32 => "IsInt",
            PrimitiveKind::Uint32 => "IsUint",
            PrimitiveKind::Int64 => "IsInt64",
            PrimitiveKind::Uint64 => "IsUint64",
            PrimitiveKind::Float | PrimitiveKind::Double => "IsNumber",
        }
    }

    /// RapidJSON accessor reading the value (e.g. `GetString`).
    pub fn json_getter(self) -> &'static str {
        match self {
            PrimitiveKind::Text => "GetString",
            PrimitiveKind::Bool => "GetBool",
            PrimitiveKind::Int32 => "GetInt",
            PrimitiveKind::Uint32 => "GetUint",
            PrimitiveKind::Int64 => "GetInt64",
            PrimitiveKind::Uint64 => "GetUint64",
            PrimitiveKind::Float => "GetFloat",
            PrimitiveKind::Double => "GetDouble",
        }
    }

    /// Whether numeric constraints apply to this kind.
    pub fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Text | PrimitiveKind::Bool)
    }
}

/// How an attribute's type reference resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeCategory<'a> {
    /// Whitelisted scalar, stored by value.
    Primitive(PrimitiveKind),

    /// Inner type of the enclosing class, stored by value.
    InlineStruct(&'a ClassSpec),

    /// Schema enum, converted through its `to_string`/`from_string` pair.
    EnumRef(&'a EnumSpec),

    /// Top-level class, stored behind a nullable shared handle.
    ClassRef(&'a ClassSpec),

    /// Nothing matched; the field is declared but otherwise inert.
    Unresolved,
}

impl TypeCategory<'_> {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, TypeCategory::Unresolved)
    }
}

/// Immutable name → definition lookup tables built once from a [`Schema`].
#[derive(Debug, Clone)]
pub struct SchemaIndex<'a> {
    enums: BTreeMap<&'a str, &'a EnumSpec>,
    classes: BTreeMap<&'a str, &'a ClassSpec>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        let enums = schema
            .enums
            .iter()
            .map(|spec| (spec.name.as_str(), spec))
            .collect();
        let classes = schema
            .classes
            .iter()
            .map(|spec| (spec.name.as_str(), spec))
            .collect();

        Self { enums, classes }
    }

    pub fn enum_named(&self, name: &str) -> Option<&'a EnumSpec> {
        self.enums.get(name).copied()
    }

    pub fn class_named(&self, name: &str) -> Option<&'a ClassSpec> {
        self.classes.get(name).copied()
    }

    /// Classify `type_ref` as seen from inside `enclosing`.
    pub fn classify(&self, type_ref: &str, enclosing: &'a ClassSpec) -> TypeCategory<'a> {
        if let Some(kind) = PrimitiveKind::from_spelling(type_ref) {
            return TypeCategory::Primitive(kind);
        }
        if let Some(spec) = self.class_named(type_ref) {
            return TypeCategory::ClassRef(spec);
        }
        if let Some(inner) = enclosing.inner_struct(type_ref) {
            return TypeCategory::InlineStruct(inner);
        }
        if let Some(spec) = self.enum_named(type_ref) {
            return TypeCategory::EnumRef(spec);
        }
        TypeCategory::Unresolved
    }
}
