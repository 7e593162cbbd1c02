//! Assembly of the two output artifacts.
//!
//! The declarations file and the implementation file are rendered fully in
//! memory; writing them is left to the caller.

use crate::cpp::{FOUNDATIONAL_INCLUDES, FROM_STRING_TEMPLATE};
use crate::declarations::{class_declaration, enum_declaration, forward_declarations};
use crate::implementation::{class_implementation, enum_implementation};
use crate::report::GenerationReport;
use json2cpp_core::{Schema, SchemaIndex};
use tracing::info;

/// Names baked into the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    /// File name the implementation file includes (e.g. `example_classes.h`).
    pub header_file: String,

    /// Schema file name recorded in the banner.
    pub schema_source: String,
}

impl ArtifactNames {
    pub fn new(header_file: impl Into<String>, schema_source: impl Into<String>) -> Self {
        Self {
            header_file: header_file.into(),
            schema_source: schema_source.into(),
        }
    }
}

/// Rendered artifacts plus the diagnostics gathered on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Declarations file contents.
    pub header: String,

    /// Implementation file contents.
    pub source: String,

    pub report: GenerationReport,
}

/// Generate both artifacts for `schema`.
///
/// Output depends only on the inputs: the same schema and names always give
/// byte-identical text.
pub fn generate(schema: &Schema, names: &ArtifactNames) -> GeneratedFiles {
    let index = SchemaIndex::new(schema);

    info!(
        enums = schema.enums.len(),
        types = schema.type_count(),
        namespace = %schema.metadata.namespace,
        "Generating C++ sources"
    );

    GeneratedFiles {
        header: render_header(&index, schema, names),
        source: render_source(&index, schema, names),
        report: GenerationReport::collect(&index, schema),
    }
}

fn render_header<'a>(index: &SchemaIndex<'a>, schema: &'a Schema, names: &ArtifactNames) -> String {
    let mut output = banner(names);
    output.push_str("#pragma once\n\n");
    for include in FOUNDATIONAL_INCLUDES {
        output.push_str(&format!("#include <{include}>\n"));
    }
    output.push('\n');

    let mut sections: Vec<String> = Vec::new();
    if !schema.enums.is_empty() {
        sections.push(FROM_STRING_TEMPLATE.to_string());
    }
    sections.extend(schema.enums.iter().map(enum_declaration));
    if !schema.classes.is_empty() {
        sections.push(forward_declarations(&schema.classes));
    }
    sections.extend(schema.classes.iter().map(|spec| class_declaration(index, spec)));

    output.push_str(&wrap_namespace(&schema.metadata.namespace, &sections.join("\n")));
    output
}

fn render_source<'a>(index: &SchemaIndex<'a>, schema: &'a Schema, names: &ArtifactNames) -> String {
    let mut output = banner(names);
    output.push_str(&format!("#include \"{}\"\n\n", names.header_file));

    let mut sections: Vec<String> = Vec::new();
    sections.extend(schema.enums.iter().map(enum_implementation));
    sections.extend(schema.classes.iter().map(|spec| class_implementation(index, spec)));

    output.push_str(&wrap_namespace(&schema.metadata.namespace, &sections.join("\n")));
    output
}

fn banner(names: &ArtifactNames) -> String {
    format!(
        "// Auto-generated by json2cpp\n// Source: {0}\n// DO NOT EDIT - regenerate with: json2cpp --schema {0}\n\n",
        names.schema_source
    )
}

fn wrap_namespace(namespace: &str, body: &str) -> String {
    match (namespace.is_empty(), body.is_empty()) {
        (true, _) => body.to_string(),
        (false, true) => format!("namespace {namespace} {{\n\n}} // namespace {namespace}\n"),
        (false, false) => format!("namespace {namespace} {{\n\n{body}\n}} // namespace {namespace}\n"),
    }
}

#[cfg(test)]
#[path = "assembler/assembler_tests.rs"]
mod assembler_tests;
