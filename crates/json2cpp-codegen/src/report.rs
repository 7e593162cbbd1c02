//! Diagnostics collected alongside generation.
//!
//! Attributes whose type the resolver cannot place are still declared, but
//! get no (de)serialization or validation statements. Constraints on
//! non-numeric attributes are dropped. Both are recorded here so the CLI can
//! surface them instead of shipping partially inert types silently.
//!
//! Reference cycles between top-level classes are legal (the shared handle
//! breaks them at the value level) and are recorded for review.

use crate::naming::ScopePath;
use json2cpp_core::{ClassSpec, Schema, SchemaIndex, TypeCategory};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Why an attribute did not get full generated support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnhandledReason {
    /// The type reference matched no primitive, enum, class, or inner struct.
    UnresolvedType,

    /// A min/max constraint targets an attribute that is not a numeric primitive.
    NonNumericConstraint,
}

/// One attribute the generated code does not fully handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledAttribute {
    /// Qualified name of the owning type.
    pub owner: String,
    pub attribute: String,
    pub type_ref: String,
    pub reason: UnhandledReason,
}

impl fmt::Display for UnhandledAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            UnhandledReason::UnresolvedType => write!(
                f,
                "{}::{} has unresolved type `{}`; it is declared but not serialized or validated",
                self.owner, self.attribute, self.type_ref
            ),
            UnhandledReason::NonNumericConstraint => write!(
                f,
                "{}::{} of type `{}` has a numeric constraint that was not emitted",
                self.owner, self.attribute, self.type_ref
            ),
        }
    }
}

/// Everything worth telling the schema author after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub unhandled: Vec<UnhandledAttribute>,

    /// Groups of top-level classes that reach themselves through class references.
    pub cycles: Vec<Vec<String>>,
}

impl GenerationReport {
    /// Walk the schema with the shared classifier and record every gap.
    pub fn collect<'a>(index: &SchemaIndex<'a>, schema: &'a Schema) -> Self {
        let mut unhandled = Vec::new();
        for spec in &schema.classes {
            collect_unhandled(index, spec, &ScopePath::root().child(&spec.name), &mut unhandled);
        }

        Self {
            unhandled,
            cycles: find_cycles(index, schema),
        }
    }

    /// True when every attribute is fully handled.
    pub fn is_clean(&self) -> bool {
        self.unhandled.is_empty()
    }
}

fn collect_unhandled<'a>(
    index: &SchemaIndex<'a>,
    spec: &'a ClassSpec,
    path: &ScopePath,
    out: &mut Vec<UnhandledAttribute>,
) {
    for inner in &spec.inner_structs {
        collect_unhandled(index, inner, &path.child(&inner.name), out);
    }

    for attr in &spec.attributes {
        let category = index.classify(&attr.type_ref, spec);
        if !category.is_resolved() {
            out.push(UnhandledAttribute {
                owner: path.qualified(),
                attribute: attr.name.clone(),
                type_ref: attr.type_ref.clone(),
                reason: UnhandledReason::UnresolvedType,
            });
        }
    }

    for (attribute, constraint) in &spec.constraints {
        if constraint.is_empty() {
            continue;
        }
        let Some(attr) = spec.attribute(attribute) else {
            continue;
        };
        let numeric = matches!(
            index.classify(&attr.type_ref, spec),
            TypeCategory::Primitive(kind) if kind.is_numeric()
        );
        if !numeric {
            out.push(UnhandledAttribute {
                owner: path.qualified(),
                attribute: attr.name.clone(),
                type_ref: attr.type_ref.clone(),
                reason: UnhandledReason::NonNumericConstraint,
            });
        }
    }
}

/// Top-level classes referenced from `spec` or any of its inner types.
fn referenced_classes<'a>(index: &SchemaIndex<'a>, spec: &'a ClassSpec, out: &mut BTreeSet<&'a str>) {
    for attr in &spec.attributes {
        if let TypeCategory::ClassRef(target) = index.classify(&attr.type_ref, spec) {
            out.insert(target.name.as_str());
        }
    }
    for inner in &spec.inner_structs {
        referenced_classes(index, inner, out);
    }
}

fn find_cycles<'a>(index: &SchemaIndex<'a>, schema: &'a Schema) -> Vec<Vec<String>> {
    let edges: BTreeMap<&str, BTreeSet<&str>> = schema
        .classes
        .iter()
        .map(|spec| {
            let mut targets = BTreeSet::new();
            referenced_classes(index, spec, &mut targets);
            (spec.name.as_str(), targets)
        })
        .collect();

    let reach: BTreeMap<&str, BTreeSet<&str>> = schema
        .classes
        .iter()
        .map(|spec| (spec.name.as_str(), reachable(&edges, &spec.name)))
        .collect();
    let reaches = |from: &str, to: &str| reach.get(from).is_some_and(|set| set.contains(to));

    let mut grouped: BTreeSet<String> = BTreeSet::new();
    let mut cycles = Vec::new();

    for spec in &schema.classes {
        let name = spec.name.as_str();
        if grouped.contains(name) || !reaches(name, name) {
            continue;
        }

        let group: Vec<String> = schema
            .classes
            .iter()
            .map(|other| other.name.as_str())
            .filter(|&other| reaches(name, other) && reaches(other, name))
            .map(str::to_string)
            .collect();

        grouped.extend(group.iter().cloned());
        cycles.push(group);
    }

    cycles
}

/// Every class reachable from `from` by following one or more references.
fn reachable<'s>(edges: &BTreeMap<&'s str, BTreeSet<&'s str>>, from: &str) -> BTreeSet<&'s str> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<&str> = edges.get(from).into_iter().flatten().copied().collect();

    while let Some(next) = stack.pop() {
        if seen.insert(next) {
            stack.extend(edges.get(next).into_iter().flatten().copied());
        }
    }

    seen
}
