//! The declarative schema a configuration type exposes, and the extraction
//! of a [`ConfigSpec`] from it.
//!
//! A configuration type describes its fields through a table of
//! [`FieldDescriptor`]s. The descriptor carries the field's kind explicitly,
//! or as a legacy shorthand via a doc line of the form `type: description`
//! whose type token is resolved against a fixed name table. An exhaustive
//! enumeration attached with [`FieldDescriptor::values`] always wins over a
//! doc-declared type.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::error::ArgspecError;
use crate::spec::ConfigSpec;
use crate::value::{ConfigKind, ConfigValue, EnumSpec, FieldValue};

/// Fallback description for fields that declare none.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Matches a doc line of the form `(type ":")? description`.
const DOC_REGEX: &str = r"^(?:(?P<type>\S+):\s+)?(?P<doc>\S.*)$";

fn doc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DOC_REGEX).expect("doc line regex is valid"))
}

/// The contract a configuration type fulfills to be parsed from the command
/// line.
///
/// `descriptors` is the schema: one entry per public field, in declaration
/// order. `set` is the validating assignment path; an error message it
/// returns may reference fields in angle brackets (`<port>`), which the
/// parser rewrites to the names shown in the synopsis. `get` reads a field
/// back for summarization.
pub trait ConfigSchema: Default {
    fn descriptors() -> Vec<FieldDescriptor>;

    fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String>;

    fn get(&self, name: &str) -> Option<FieldValue>;
}

/// Declarative description of one configuration field.
///
/// Built with chained methods at schema-definition time:
///
/// ```
/// use argspec::{ConfigKind, FieldDescriptor, FieldValue};
///
/// let port = FieldDescriptor::new("port")
///     .doc("int: Port to bind.")
///     .default(FieldValue::Int(8080));
/// let target = FieldDescriptor::new("target")
///     .kind(ConfigKind::Str)
///     .position(0);
/// ```
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    doc: Option<&'static str>,
    kind: Option<ConfigKind>,
    enum_values: Option<EnumSpec>,
    default: Option<FieldValue>,
    position: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            doc: None,
            kind: None,
            enum_values: None,
            default: None,
            position: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attach a documentation line. Its first line is parsed as
    /// `(type ":")? description`; a leading type token declares the field's
    /// kind unless one is set explicitly.
    pub fn doc(mut self, line: &'static str) -> Self {
        self.doc = Some(line);
        self
    }

    /// Declare the field's kind explicitly, overriding any doc-declared type.
    pub fn kind(mut self, kind: ConfigKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Declare the admissible values exhaustively. Overrides both an explicit
    /// kind and a doc-declared type.
    pub fn values(mut self, spec: EnumSpec) -> Self {
        self.enum_values = Some(spec);
        self
    }

    pub fn default(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Pin the field to a position among the positional arguments. Only
    /// considered when the field is required.
    pub fn position(mut self, index: usize) -> Self {
        self.position = Some(index);
        self
    }
}

impl ConfigSpec {
    /// Create a specification from a configuration type's descriptor table.
    ///
    /// One entry is produced per descriptor, in declaration order. The kind
    /// resolves in this order: exhaustive values, explicit kind, doc-declared
    /// type, then `str`. A declared default is appended to the description as
    /// `(Default value: …)`.
    pub fn from_schema<C: ConfigSchema>() -> Result<ConfigSpec, ArgspecError> {
        let mut spec = ConfigSpec::new();
        for descriptor in C::descriptors() {
            let (doc_type, doc_text) = match descriptor.doc {
                Some(line) => parse_doc_line(line),
                None => (None, None),
            };

            let kind = if let Some(values) = descriptor.enum_values {
                ConfigKind::Enum(values)
            } else if let Some(kind) = descriptor.kind {
                kind
            } else if let Some(token) = doc_type {
                resolve_type(token).ok_or_else(|| ArgspecError::UnknownType {
                    field: descriptor.name.to_string(),
                    type_name: token.to_string(),
                })?
            } else {
                ConfigKind::Str
            };

            let mut description = doc_text
                .map(str::to_string)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            if let Some(default) = &descriptor.default {
                description.push_str(&format!(" (Default value: {default}.)"));
            }

            debug!(
                "field '{}' resolved to kind {} (required: {})",
                descriptor.name,
                kind.tag(),
                descriptor.default.is_none()
            );

            spec.add_config(ConfigValue::new(
                descriptor.name,
                description,
                kind,
                descriptor.default,
                descriptor.position,
            )?)?;
        }
        Ok(spec)
    }
}

/// Split the first line of a doc string into an optional type token and the
/// description. `int: Retries.` yields `(Some("int"), Some("Retries."))`;
/// `Retries.` yields `(None, Some("Retries."))`; a blank line yields nothing.
fn parse_doc_line(line: &str) -> (Option<&str>, Option<&str>) {
    let first = line.lines().next().unwrap_or("");
    match doc_regex().captures(first) {
        Some(captures) => (
            captures.name("type").map(|m| m.as_str()),
            captures.name("doc").map(|m| m.as_str()),
        ),
        None => (None, None),
    }
}

/// Resolve a declared type token to a kind. Unknown tokens yield `None`.
fn resolve_type(token: &str) -> Option<ConfigKind> {
    match token {
        "bool" => Some(ConfigKind::Bool),
        "str" | "string" => Some(ConfigKind::Str),
        "int" | "integer" => Some(ConfigKind::Int),
        "float" | "real" => Some(ConfigKind::Real),
        "dict" | "map" => Some(ConfigKind::Map),
        "list" => Some(ConfigKind::List),
        _ => None,
    }
}
