use thiserror::Error;

use crate::value::KindTag;

#[derive(Debug, Error)]
pub enum ArgspecError {
    #[error("Configuration value names must not be empty")]
    EmptyName,

    #[error("The specification already contains a value named '{0}'")]
    DuplicateName(String),

    #[error("Unknown type '{type_name}' declared for field '{field}'")]
    UnknownType { field: String, type_name: String },

    #[error("The boolean value '{0}' has to have a default value")]
    BoolWithoutDefault(String),

    #[error("The default for '{name}' does not match its declared type: {value}")]
    DefaultTypeMismatch { name: String, value: String },

    #[error("No parser factory supports values of kind {kind} (field '{field}')")]
    UnsupportedType { field: String, kind: KindTag },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Parse(#[from] clap::Error),
}
