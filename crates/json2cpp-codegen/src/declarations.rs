//! Declarations file rendering: enums, forward declarations, and class bodies.

use crate::cpp::{FROM_JSON_PARAMS, TO_JSON_PARAMS, field_type};
use crate::naming::{ScopePath, getter_name, indent, setter_name};
use json2cpp_core::{ClassSpec, EnumSpec, SchemaIndex};
use tracing::debug;

/// Render an enum and the declarations of its converter pair.
pub fn enum_declaration(spec: &EnumSpec) -> String {
    let mut code = format!("enum class {} {{\n", spec.name);

    if !spec.values.is_empty() {
        let values: Vec<String> = spec.values.iter().map(|v| format!("    {v}")).collect();
        code.push_str(&values.join(",\n"));
        code.push('\n');
    }
    code.push_str("};\n\n");

    code.push_str(&format!("std::string to_string({} value);\n", spec.name));
    code.push_str("template <>\n");
    code.push_str(&format!(
        "{0} from_string<{0}>(const std::string& str);\n",
        spec.name
    ));

    code
}

/// Forward-declare every top-level type so class references may point ahead.
pub fn forward_declarations(classes: &[ClassSpec]) -> String {
    classes
        .iter()
        .map(|spec| format!("{} {};\n", spec.object_type.keyword(), spec.name))
        .collect()
}

/// Render a top-level class and, nested inside it, all of its inner types.
pub fn class_declaration<'a>(index: &SchemaIndex<'a>, spec: &'a ClassSpec) -> String {
    render_class(index, spec, &ScopePath::root().child(&spec.name))
}

fn render_class<'a>(index: &SchemaIndex<'a>, spec: &'a ClassSpec, path: &ScopePath) -> String {
    debug!(class = %path.qualified(), depth = path.depth(), "Emitting declaration");

    let mut blocks: Vec<String> = Vec::new();

    for inner in &spec.inner_structs {
        let nested = render_class(index, inner, &path.child(&inner.name));
        blocks.push(indent(&nested, 1));
    }

    if !spec.attributes.is_empty() {
        let mut fields = String::new();
        for attr in &spec.attributes {
            let category = index.classify(&attr.type_ref, spec);
            fields.push_str(&format!(
                "    {} {}{{}};\n",
                field_type(&category, &attr.type_ref),
                attr.name
            ));
        }
        blocks.push(fields);
    }

    blocks.push(format!("    {}();\n", spec.name));

    if spec.object_type.has_accessors() && !spec.attributes.is_empty() {
        let mut accessors = String::new();
        for attr in &spec.attributes {
            let category = index.classify(&attr.type_ref, spec);
            let ty = field_type(&category, &attr.type_ref);
            accessors.push_str(&format!(
                "    const {ty}& {}() const;\n",
                getter_name(&attr.name)
            ));
            accessors.push_str(&format!(
                "    void {}(const {ty}& value);\n",
                setter_name(&attr.name)
            ));
        }
        blocks.push(accessors);
    }

    blocks.push(format!(
        "    void fromJson({FROM_JSON_PARAMS});\n    rapidjson::Value toJson({TO_JSON_PARAMS}) const;\n    bool validate() const;\n"
    ));

    let mut code = format!("{} {} {{\n", spec.object_type.keyword(), spec.name);
    if spec.object_type.has_accessors() {
        code.push_str("public:\n");
    }
    code.push_str(&blocks.join("\n"));
    code.push_str("};\n");

    code
}
