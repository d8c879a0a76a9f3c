//! Mapping of specification entries onto concrete argument definitions.
//!
//! Each [`ConfigValue`] is turned into one clap argument by a
//! [`ParserFactory`]. The [`DefaultFactory`] handles the whole built-in kind
//! set; a [`FactoryRegistry`] dispatches on [`KindTag`] so applications can
//! swap in their own factory for a kind without touching the rest of the
//! pipeline.

use std::collections::HashMap;

use clap::builder::ValueParser;
use clap::{Arg, ArgAction, Command};

use crate::error::ArgspecError;
use crate::value::{ConfigKind, ConfigValue, FieldValue, KindTag};

/// Registers one configuration value as an argument on a clap command.
pub trait ParserFactory {
    /// Whether this factory can register values of the given kind.
    fn supports(&self, tag: KindTag) -> bool;

    /// Add an argument definition for `value` to `cmd` and return the
    /// extended command.
    ///
    /// The argument's id must be the field name exactly as given by
    /// [`ConfigValue::name`]; the populate step looks matches up by it.
    fn register(&self, cmd: Command, value: &ConfigValue) -> Result<Command, ArgspecError>;
}

/// The built-in factory, covering booleans, strings, integers, reals, maps,
/// lists, and exhaustive enumerations.
///
/// Argument names are the field names with underscores replaced by dashes.
/// Optional values become `--name` options; required values become bare
/// positional arguments when positional mode is on, `--name` options
/// otherwise. Booleans are zero-argument flags whose presence toggles the
/// default; a boolean defaulting to `true` is exposed as `--no-name`.
#[derive(Debug, Clone)]
pub struct DefaultFactory {
    positional_args: bool,
}

impl DefaultFactory {
    pub fn new(positional_args: bool) -> Self {
        Self { positional_args }
    }
}

impl ParserFactory for DefaultFactory {
    fn supports(&self, _tag: KindTag) -> bool {
        true
    }

    fn register(&self, cmd: Command, value: &ConfigValue) -> Result<Command, ArgspecError> {
        let dashed = value.name().replace('_', "-");

        if *value.kind() == ConfigKind::Bool {
            let default = matches!(value.default(), Some(FieldValue::Bool(true)));
            let long = if default {
                format!("no-{dashed}")
            } else {
                dashed
            };
            let arg = Arg::new(value.name().to_string())
                .long(long)
                .action(ArgAction::SetTrue)
                .help(value.description().to_string());
            return Ok(cmd.arg(arg));
        }

        let kind = value.kind().clone();
        let field = value.name().to_string();
        let coerce = move |token: &str| coerce_token(&kind, &field, token);

        let mut arg = Arg::new(value.name().to_string())
            .help(value.description().to_string())
            .value_parser(ValueParser::new(coerce));

        if self.positional_args && value.required() {
            arg = arg.required(true);
        } else {
            arg = arg
                .long(dashed)
                .value_name(metavar(value.kind()))
                .required(value.required());
        }
        Ok(cmd.arg(arg))
    }
}

/// Coerce one raw token to the field's kind. The returned error text is what
/// clap reports next to the offending argument.
fn coerce_token(kind: &ConfigKind, field: &str, token: &str) -> Result<FieldValue, String> {
    match kind {
        ConfigKind::Bool => Err(format!("boolean field '{field}' takes no value")),
        ConfigKind::Str => Ok(FieldValue::Str(token.to_string())),
        ConfigKind::Int => token
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|e| format!("invalid integer '{token}': {e}")),
        ConfigKind::Real => token
            .parse::<f64>()
            .map(FieldValue::Real)
            .map_err(|e| format!("invalid number '{token}': {e}")),
        ConfigKind::Map => match serde_yaml::from_str::<serde_yaml::Value>(token) {
            Ok(serde_yaml::Value::Mapping(mapping)) => Ok(FieldValue::Map(mapping)),
            _ => Err(format!("invalid mapping literal '{token}'")),
        },
        ConfigKind::List => match serde_yaml::from_str::<serde_yaml::Value>(token) {
            Ok(serde_yaml::Value::Sequence(sequence)) => Ok(FieldValue::List(sequence)),
            _ => Err(format!("invalid list literal '{token}'")),
        },
        ConfigKind::Enum(spec) => spec.resolve(token).cloned().ok_or_else(|| {
            format!(
                "illegal value '{token}', possible values are {{{}}}",
                spec.member_names()
            )
        }),
    }
}

/// The meta variable shown for a value-taking option in the synopsis.
fn metavar(kind: &ConfigKind) -> &'static str {
    match kind {
        ConfigKind::Str => "S",
        ConfigKind::Int => "N",
        ConfigKind::Real => "R",
        ConfigKind::Map => "D",
        _ => "X",
    }
}

/// Dispatches registration to a per-kind factory, falling back to the
/// [`DefaultFactory`] for kinds without a custom entry.
pub struct FactoryRegistry {
    default: DefaultFactory,
    custom: HashMap<KindTag, Box<dyn ParserFactory>>,
}

impl FactoryRegistry {
    pub fn new(positional_args: bool) -> Self {
        Self {
            default: DefaultFactory::new(positional_args),
            custom: HashMap::new(),
        }
    }

    /// Install a custom factory for one kind, replacing any previous entry.
    pub fn insert(&mut self, tag: KindTag, factory: Box<dyn ParserFactory>) {
        self.custom.insert(tag, factory);
    }

    pub fn set_positional_args(&mut self, positional_args: bool) {
        self.default = DefaultFactory::new(positional_args);
    }

    /// Register `value` through the factory responsible for its kind.
    ///
    /// Fails with [`ArgspecError::UnsupportedType`] when the responsible
    /// factory does not support the kind.
    pub fn register(&self, cmd: Command, value: &ConfigValue) -> Result<Command, ArgspecError> {
        let tag = value.kind().tag();
        let factory: &dyn ParserFactory = match self.custom.get(&tag) {
            Some(custom) => custom.as_ref(),
            None => &self.default,
        };
        if !factory.supports(tag) {
            return Err(ArgspecError::UnsupportedType {
                field: value.name().to_string(),
                kind: tag,
            });
        }
        factory.register(cmd, value)
    }
}
