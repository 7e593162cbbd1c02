//! Naming utilities for C++ code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `hairColor` | [`getter_name`] | `getHairColor` |
//! | `hairColor` | [`setter_name`] | `setHairColor` |
//! | `Person` → `Body` | [`ScopePath::qualified`] | `Person::Body` |

/// Separator between enclosing type names in a qualified name.
pub const SCOPE_SEPARATOR: &str = "::";

/// Indentation unit used in every emitted file.
pub const INDENT: &str = "    ";

/// The chain of enclosing type names while walking nested inner types.
///
/// The walk passes this down explicitly instead of relying on the call stack,
/// so every emitter can ask for the qualified name at any depth.
///
/// # Examples
///
/// ```
/// use json2cpp_codegen::naming::ScopePath;
///
/// let path = ScopePath::root().child("Person").child("Body");
/// assert_eq!(path.qualified(), "Person::Body");
/// assert_eq!(path.depth(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopePath {
    segments: Vec<String>,
}

impl ScopePath {
    /// The namespace level, outside any type.
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a type nested directly inside this one.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Number of enclosing type names (0 at namespace level).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The innermost type name, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All names joined with [`SCOPE_SEPARATOR`].
    pub fn qualified(&self) -> String {
        self.segments.join(SCOPE_SEPARATOR)
    }

    /// Qualify a name declared inside the type this path points at.
    pub fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_string()
        } else {
            format!("{}{SCOPE_SEPARATOR}{name}", self.qualified())
        }
    }
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use json2cpp_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("world"), "World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Getter name for an attribute (`age` → `getAge`).
pub fn getter_name(attribute: &str) -> String {
    format!("get{}", capitalize(attribute))
}

/// Setter name for an attribute (`age` → `setAge`).
pub fn setter_name(attribute: &str) -> String {
    format!("set{}", capitalize(attribute))
}

/// Indent every non-empty line of `text` by `levels` indentation units.
pub fn indent(text: &str, levels: usize) -> String {
    let prefix = INDENT.repeat(levels);
    let mut out = String::with_capacity(text.len() + levels * 4 * text.lines().count());

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            out.push_str(line.trim_start_matches([' ', '\t']));
        } else {
            out.push_str(&prefix);
            out.push_str(line);
        }
    }

    out
}
