//! The front door of the crate: build a command line from a schema, parse
//! it, and populate a configuration object from the matches.
//!
//! [`SpecParser`] ties the other modules together. It extracts a
//! [`ConfigSpec`] from the schema type, registers every entry through a
//! [`FactoryRegistry`] in registration order, hands the command to clap, and
//! feeds the matched values back through the schema's validating setters.

use std::ffi::{OsStr, OsString};
use std::marker::PhantomData;
use std::path::Path;

use clap::error::ErrorKind;
use clap::Command;

use crate::error::ArgspecError;
use crate::factory::{FactoryRegistry, ParserFactory};
use crate::rewrite::rewrite_field_refs;
use crate::schema::ConfigSchema;
use crate::spec::ConfigSpec;
use crate::value::{FieldValue, KindTag};

/// Command-line parser for a [`ConfigSchema`] type.
///
/// ```no_run
/// use argspec::{ConfigSchema, SpecParser};
///
/// fn run<C: ConfigSchema>() -> C {
///     SpecParser::<C>::new()
///         .unwrap()
///         .app_name("server")
///         .app_description("Runs the server.")
///         .parse()
/// }
/// ```
pub struct SpecParser<C: ConfigSchema> {
    spec: ConfigSpec,
    factories: FactoryRegistry,
    app_name: Option<String>,
    app_description: Option<String>,
    _schema: PhantomData<C>,
}

impl<C: ConfigSchema> SpecParser<C> {
    /// Extract the specification from `C` and set up the default factories.
    ///
    /// Positional arguments are enabled by default.
    pub fn new() -> Result<Self, ArgspecError> {
        Ok(Self {
            spec: ConfigSpec::from_schema::<C>()?,
            factories: FactoryRegistry::new(true),
            app_name: None,
            app_description: None,
            _schema: PhantomData,
        })
    }

    /// Program name shown in usage and error output. Defaults to the name
    /// the binary was invoked as.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// One-line description shown at the top of the help text.
    pub fn app_description(mut self, description: impl Into<String>) -> Self {
        self.app_description = Some(description.into());
        self
    }

    /// Whether required values become bare positional arguments. When off,
    /// every value is a `--name` option.
    pub fn positional_args(mut self, on: bool) -> Self {
        self.factories.set_positional_args(on);
        self
    }

    /// Install a custom factory for one kind of value.
    pub fn factory(mut self, tag: KindTag, factory: impl ParserFactory + 'static) -> Self {
        self.factories.insert(tag, Box::new(factory));
        self
    }

    /// The specification extracted from the schema.
    pub fn spec(&self) -> &ConfigSpec {
        &self.spec
    }

    /// Parse the process arguments, exiting with a usage message on any
    /// parse or validation failure.
    pub fn parse(self) -> C {
        let argv: Vec<OsString> = std::env::args_os().collect();
        let name = self
            .app_name
            .clone()
            .unwrap_or_else(|| invocation_name(argv.first()));
        let cmd = match self.build_command(name.clone()) {
            Ok(cmd) => cmd,
            Err(err) => Command::new(name).error(ErrorKind::InvalidValue, err.to_string()).exit(),
        };
        let mut usage = cmd.clone();
        let matches = match cmd.try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(err) => err.exit(),
        };
        match self.populate(&matches) {
            Ok(conf) => conf,
            Err(err) => usage.error(ErrorKind::ValueValidation, err.to_string()).exit(),
        }
    }

    /// Parse the given arguments, returning errors instead of exiting. The
    /// first item is taken as the program name.
    pub fn try_parse_from<I, T>(self, args: I) -> Result<C, ArgspecError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let name = self.app_name.clone().unwrap_or_else(|| "app".to_string());
        let cmd = self.build_command(name)?;
        let matches = cmd.try_get_matches_from(args)?;
        self.populate(&matches)
    }

    fn build_command(&self, name: String) -> Result<Command, ArgspecError> {
        let mut cmd = Command::new(name);
        if let Some(about) = &self.app_description {
            cmd = cmd.about(about.clone());
        }
        for value in self.spec.registration_order() {
            cmd = self.factories.register(cmd, value)?;
        }
        Ok(cmd)
    }

    fn populate(&self, matches: &clap::ArgMatches) -> Result<C, ArgspecError> {
        let mut conf = C::default();
        for value in self.spec.iter() {
            let name = value.name();
            let resolved = if value.kind().tag() == KindTag::Bool {
                let default = matches!(value.default(), Some(FieldValue::Bool(true)));
                let flagged = matches.get_flag(name);
                Some(FieldValue::Bool(if flagged { !default } else { default }))
            } else {
                match matches.get_one::<FieldValue>(name) {
                    Some(matched) => Some(matched.clone()),
                    None => value.default().cloned(),
                }
            };
            if let Some(resolved) = resolved {
                log::debug!("setting {name} to {resolved}");
                conf.set(name, resolved)
                    .map_err(|msg| ArgspecError::Validation(rewrite_field_refs(&msg)))?;
            }
        }
        Ok(conf)
    }
}

/// File stem of the invoked binary, for use as the default program name.
fn invocation_name(argv0: Option<&OsString>) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_stem)
        .and_then(OsStr::to_str)
        .map(str::to_string)
        .unwrap_or_else(|| "app".to_string())
}
