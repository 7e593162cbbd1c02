//! C++ spellings shared by the declaration and implementation emitters.

use json2cpp_core::TypeCategory;

/// Headers every declarations file includes, in emission order.
pub const FOUNDATIONAL_INCLUDES: &[&str] = &[
    "cstdint",
    "memory",
    "stdexcept",
    "string",
    "vector",
    "rapidjson/document.h",
];

/// Parameter list of `fromJson`.
pub const FROM_JSON_PARAMS: &str = "const rapidjson::Value& json";

/// Parameter list of `toJson`.
pub const TO_JSON_PARAMS: &str = "rapidjson::Document::AllocatorType& allocator";

/// Primary template the per-enum `from_string` specialisations hang off.
pub const FROM_STRING_TEMPLATE: &str = "template <typename E>\nE from_string(const std::string& str);\n";

/// Field type as written in class scope.
///
/// Class references become shared handles; every other category keeps the
/// schema spelling. Out-of-line definitions only use it where class-scope
/// lookup applies (parameters, trailing return types, bodies).
pub fn field_type(category: &TypeCategory<'_>, type_ref: &str) -> String {
    match category {
        TypeCategory::ClassRef(spec) => format!("std::shared_ptr<{}>", spec.name),
        _ => type_ref.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use json2cpp_core::{ClassSpec, EnumSpec, PrimitiveKind};

    #[test]
    fn field_type___class_reference___is_shared_handle() {
        let person = ClassSpec::new("Person");

        let ty = field_type(&TypeCategory::ClassRef(&person), "Person");

        assert_eq!(ty, "std::shared_ptr<Person>");
    }

    #[test]
    fn field_type___other_categories___keep_spelling() {
        let body = ClassSpec::new("Body");
        let eyes = EnumSpec {
            name: "EyeColor".into(),
            values: vec![],
        };

        assert_eq!(
            field_type(&TypeCategory::Primitive(PrimitiveKind::Double), "double"),
            "double"
        );
        assert_eq!(field_type(&TypeCategory::InlineStruct(&body), "Body"), "Body");
        assert_eq!(field_type(&TypeCategory::EnumRef(&eyes), "EyeColor"), "EyeColor");
        assert_eq!(
            field_type(&TypeCategory::Unresolved, "std::vector<Person>"),
            "std::vector<Person>"
        );
    }
}
