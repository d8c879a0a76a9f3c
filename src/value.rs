//! The specification model: runtime field values, the closed set of supported
//! kinds, and the per-field descriptor that a [`ConfigSpec`](crate::ConfigSpec)
//! is made of.

use std::fmt;

use serde_yaml::{Mapping, Sequence};

use crate::error::ArgspecError;

/// A runtime value for one configuration field.
///
/// This is what coercion produces from a command-line token and what a
/// configuration instance's setters receive.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Str(String),
    Int(i64),
    Real(f64),
    Map(Mapping),
    List(Sequence),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Str(v) => f.write_str(v),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Map(m) => match serde_yaml::to_string(m) {
                Ok(s) => f.write_str(s.trim_end()),
                Err(_) => f.write_str("<unprintable>"),
            },
            FieldValue::List(l) => match serde_yaml::to_string(l) {
                Ok(s) => f.write_str(s.trim_end()),
                Err(_) => f.write_str("<unprintable>"),
            },
        }
    }
}

/// An exhaustive enumeration of the admissible values of a field.
///
/// Each member pairs its declared, case-sensitive external name with the
/// underlying value a matching command-line token coerces to.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpec {
    name: &'static str,
    members: Vec<(&'static str, FieldValue)>,
}

impl EnumSpec {
    pub fn new(
        name: &'static str,
        members: impl IntoIterator<Item = (&'static str, FieldValue)>,
    ) -> Self {
        Self {
            name,
            members: members.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.members.iter().map(|(n, v)| (*n, v))
    }

    /// Look up a member by its declared name (case-sensitive) and return its
    /// underlying value.
    pub fn resolve(&self, token: &str) -> Option<&FieldValue> {
        self.members
            .iter()
            .find(|(n, _)| *n == token)
            .map(|(_, v)| v)
    }

    /// All member names joined for error messages, e.g. `UNO, DOS, TRES`.
    pub fn member_names(&self) -> String {
        self.members
            .iter()
            .map(|(n, _)| *n)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn admits(&self, value: &FieldValue) -> bool {
        self.members.iter().any(|(_, v)| v == value)
    }
}

/// The data type of a configuration field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigKind {
    Bool,
    Str,
    Int,
    Real,
    Map,
    List,
    Enum(EnumSpec),
}

impl ConfigKind {
    pub fn tag(&self) -> KindTag {
        match self {
            ConfigKind::Bool => KindTag::Bool,
            ConfigKind::Str => KindTag::Str,
            ConfigKind::Int => KindTag::Int,
            ConfigKind::Real => KindTag::Real,
            ConfigKind::Map => KindTag::Map,
            ConfigKind::List => KindTag::List,
            ConfigKind::Enum(_) => KindTag::Enum,
        }
    }

    /// Whether `value` is a valid default for this kind. A real accepts an
    /// integer default; an enum accepts any member's underlying value.
    fn admits(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (ConfigKind::Bool, FieldValue::Bool(_)) => true,
            (ConfigKind::Str, FieldValue::Str(_)) => true,
            (ConfigKind::Int, FieldValue::Int(_)) => true,
            (ConfigKind::Real, FieldValue::Real(_) | FieldValue::Int(_)) => true,
            (ConfigKind::Map, FieldValue::Map(_)) => true,
            (ConfigKind::List, FieldValue::List(_)) => true,
            (ConfigKind::Enum(spec), v) => spec.admits(v),
            _ => false,
        }
    }
}

/// The discriminant of [`ConfigKind`], used as the factory registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Bool,
    Str,
    Int,
    Real,
    Map,
    List,
    Enum,
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KindTag::Bool => "bool",
            KindTag::Str => "str",
            KindTag::Int => "int",
            KindTag::Real => "real",
            KindTag::Map => "map",
            KindTag::List => "list",
            KindTag::Enum => "enum",
        };
        f.write_str(name)
    }
}

/// Describes a single value that is part of a configuration to be parsed.
///
/// Immutable after construction. `required` and `exhaustive` are derived:
/// a value is required iff it has no default, and exhaustive iff its kind is
/// an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    name: String,
    description: String,
    kind: ConfigKind,
    default: Option<FieldValue>,
    position: Option<usize>,
}

impl ConfigValue {
    /// Build a descriptor, enforcing the construction invariants: a non-empty
    /// name, a default for every boolean (there is no way to express an
    /// "absent boolean" on a command line), and a default that matches the
    /// declared kind.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ConfigKind,
        default: Option<FieldValue>,
        position: Option<usize>,
    ) -> Result<Self, ArgspecError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ArgspecError::EmptyName);
        }
        if kind == ConfigKind::Bool && default.is_none() {
            return Err(ArgspecError::BoolWithoutDefault(name));
        }
        if let Some(value) = &default {
            if !kind.admits(value) {
                return Err(ArgspecError::DefaultTypeMismatch {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            description: description.into(),
            kind,
            default,
            position,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ConfigKind {
        &self.kind
    }

    pub fn default(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    /// The requested position among positional arguments. Only considered
    /// when the value is required.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// A value has to be provided by the user iff it has no default.
    pub fn required(&self) -> bool {
        self.default.is_none()
    }

    /// Whether the admissible values are specified exhaustively (the kind is
    /// an enumeration).
    pub fn exhaustive(&self) -> bool {
        matches!(self.kind, ConfigKind::Enum(_))
    }
}
