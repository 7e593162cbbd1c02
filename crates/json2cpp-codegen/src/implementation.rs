//! Implementation file rendering: enum converters and class member definitions.
//!
//! Classes are walked in the same inner-first order as the declarations, but
//! every definition is written out of line at namespace scope, so the owner
//! is spelled with the full [`ScopePath`]. Getters use a trailing return type
//! so the field type is looked up in class scope, like parameters and bodies.

use crate::cpp::{FROM_JSON_PARAMS, TO_JSON_PARAMS, field_type};
use crate::naming::{ScopePath, getter_name, setter_name};
use json2cpp_core::{AttributeSpec, ClassSpec, EnumSpec, PrimitiveKind, SchemaIndex, TypeCategory};
use tracing::debug;

/// Render the `to_string` / `from_string` pair of one enum.
pub fn enum_implementation(spec: &EnumSpec) -> String {
    let name = &spec.name;
    let mut code = format!("std::string to_string({name} value) {{\n");
    code.push_str("    switch (value) {\n");
    for value in &spec.values {
        code.push_str(&format!("        case {name}::{value}: return \"{value}\";\n"));
    }
    code.push_str("        default: return \"Unknown\";\n");
    code.push_str("    }\n");
    code.push_str("}\n\n");

    code.push_str("template <>\n");
    code.push_str(&format!("{name} from_string<{name}>(const std::string& str) {{\n"));
    for value in &spec.values {
        code.push_str(&format!("    if (str == \"{value}\") return {name}::{value};\n"));
    }
    code.push_str(&format!(
        "    throw std::invalid_argument(\"Invalid {name} value: \" + str);\n"
    ));
    code.push_str("}\n");

    code
}

/// Render the member definitions of a top-level class and all of its inner types.
pub fn class_implementation<'a>(index: &SchemaIndex<'a>, spec: &'a ClassSpec) -> String {
    render_class(index, spec, &ScopePath::root().child(&spec.name))
}

/// An attribute paired with its resolved category.
struct Member<'a> {
    attr: &'a AttributeSpec,
    category: TypeCategory<'a>,
}

fn render_class<'a>(index: &SchemaIndex<'a>, spec: &'a ClassSpec, path: &ScopePath) -> String {
    debug!(class = %path.qualified(), "Emitting implementation");

    let qualified = path.qualified();
    let members: Vec<Member<'a>> = spec
        .attributes
        .iter()
        .map(|attr| Member {
            attr,
            category: index.classify(&attr.type_ref, spec),
        })
        .collect();

    let mut code = format!("// {qualified} implementation\n\n");

    for inner in &spec.inner_structs {
        code.push_str(&render_class(index, inner, &path.child(&inner.name)));
        code.push('\n');
    }

    code.push_str(&format!("{qualified}::{}() {{}}\n\n", spec.name));

    if spec.object_type.has_accessors() {
        for member in &members {
            code.push_str(&accessor_pair(member, path));
        }
    }

    code.push_str(&from_json(&members, &qualified));
    code.push_str(&to_json(&members, &qualified));
    code.push_str(&validate(spec, &members, &qualified));

    code
}

fn accessor_pair(member: &Member<'_>, owner: &ScopePath) -> String {
    let qualified = owner.qualified();
    let name = &member.attr.name;
    let ty = field_type(&member.category, &member.attr.type_ref);

    format!(
        "auto {qualified}::{getter}() const -> const {ty}& {{\n    return {name};\n}}\n\n\
         void {qualified}::{setter}(const {ty}& value) {{\n    {name} = value;\n}}\n\n",
        getter = getter_name(name),
        setter = setter_name(name),
    )
}

fn from_json(members: &[Member<'_>], qualified: &str) -> String {
    let mut code = format!("void {qualified}::fromJson({FROM_JSON_PARAMS}) {{\n");
    code.push_str("    if (!json.IsObject()) return;\n");

    for member in members {
        let name = &member.attr.name;
        let node = format!("json[\"{name}\"]");
        let has = format!("json.HasMember(\"{name}\")");

        match &member.category {
            TypeCategory::Primitive(kind) => code.push_str(&format!(
                "    if ({has} && {node}.{guard}()) {name} = {node}.{getter}();\n",
                guard = kind.json_guard(),
                getter = kind.json_getter(),
            )),
            TypeCategory::ClassRef(spec) => {
                code.push_str(&format!("    if ({has} && {node}.IsObject()) {{\n"));
                code.push_str(&format!("        {name} = std::make_shared<{}>();\n", spec.name));
                code.push_str(&format!("        {name}->fromJson({node});\n"));
                code.push_str("    }\n");
            }
            TypeCategory::InlineStruct(_) => code.push_str(&format!(
                "    if ({has} && {node}.IsObject()) {name}.fromJson({node});\n"
            )),
            TypeCategory::EnumRef(spec) => code.push_str(&format!(
                "    if ({has} && {node}.IsString()) {name} = from_string<{}>({node}.GetString());\n",
                spec.name
            )),
            TypeCategory::Unresolved => {}
        }
    }

    code.push_str("}\n\n");
    code
}

fn to_json(members: &[Member<'_>], qualified: &str) -> String {
    let mut code = format!("rapidjson::Value {qualified}::toJson({TO_JSON_PARAMS}) const {{\n");
    code.push_str("    rapidjson::Value json(rapidjson::kObjectType);\n");

    for member in members {
        let name = &member.attr.name;

        match &member.category {
            TypeCategory::Primitive(PrimitiveKind::Text) => code.push_str(&format!(
                "    json.AddMember(\"{name}\", rapidjson::Value({name}.c_str(), allocator).Move(), allocator);\n"
            )),
            TypeCategory::Primitive(_) => {
                code.push_str(&format!("    json.AddMember(\"{name}\", {name}, allocator);\n"))
            }
            TypeCategory::ClassRef(_) => {
                code.push_str(&format!("    if ({name}) {{\n"));
                code.push_str(&format!(
                    "        json.AddMember(\"{name}\", {name}->toJson(allocator), allocator);\n"
                ));
                code.push_str("    }\n");
            }
            TypeCategory::InlineStruct(_) => code.push_str(&format!(
                "    json.AddMember(\"{name}\", {name}.toJson(allocator), allocator);\n"
            )),
            TypeCategory::EnumRef(_) => code.push_str(&format!(
                "    json.AddMember(\"{name}\", rapidjson::Value(to_string({name}).c_str(), allocator).Move(), allocator);\n"
            )),
            TypeCategory::Unresolved => {}
        }
    }

    code.push_str("    return json;\n");
    code.push_str("}\n\n");
    code
}

fn validate(spec: &ClassSpec, members: &[Member<'_>], qualified: &str) -> String {
    let mut code = format!("bool {qualified}::validate() const {{\n");

    for (attribute, constraint) in &spec.constraints {
        let numeric = members.iter().any(|m| {
            &m.attr.name == attribute
                && matches!(m.category, TypeCategory::Primitive(kind) if kind.is_numeric())
        });
        // Non-numeric targets are skipped and surfaced by the report.
        if !numeric {
            continue;
        }
        if let Some(min) = &constraint.min {
            code.push_str(&format!("    if ({attribute} < {min}) return false;\n"));
        }
        if let Some(max) = &constraint.max {
            code.push_str(&format!("    if ({attribute} > {max}) return false;\n"));
        }
    }

    for member in members {
        if let TypeCategory::ClassRef(_) = member.category {
            let name = &member.attr.name;
            code.push_str(&format!("    if ({name} && !{name}->validate()) return false;\n"));
        }
    }

    for member in members {
        if let TypeCategory::InlineStruct(_) = member.category {
            code.push_str(&format!("    if (!{}.validate()) return false;\n", member.attr.name));
        }
    }

    code.push_str("    return true;\n");
    code.push_str("}\n");
    code
}
