//! Schema-driven command-line argument parsing.
//!
//! argspec turns a declarative description of a configuration type into a
//! full [clap](https://docs.rs/clap) command line, parses it, and hands back
//! a populated, validated configuration object. Applications describe each
//! field once, in a table of [`FieldDescriptor`]s, and get flag derivation,
//! positional ordering, typed coercion, enum handling, and help text for
//! free.
//!
//! # Describing a configuration
//!
//! A configuration type implements [`ConfigSchema`]: a descriptor table, a
//! validating setter, and a getter for summaries.
//!
//! ```
//! use argspec::{ConfigSchema, FieldDescriptor, FieldValue};
//!
//! #[derive(Default)]
//! struct Config {
//!     host: String,
//!     port: i64,
//! }
//!
//! impl ConfigSchema for Config {
//!     fn descriptors() -> Vec<FieldDescriptor> {
//!         vec![
//!             FieldDescriptor::new("host")
//!                 .doc("str: Host name to bind.")
//!                 .default(FieldValue::Str("localhost".to_string())),
//!             FieldDescriptor::new("port").doc("int: Port to bind."),
//!         ]
//!     }
//!
//!     fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String> {
//!         match (name, value) {
//!             ("host", FieldValue::Str(s)) => {
//!                 self.host = s;
//!                 Ok(())
//!             }
//!             ("port", FieldValue::Int(n)) if (1..=65535).contains(&n) => {
//!                 self.port = n;
//!                 Ok(())
//!             }
//!             ("port", other) => Err(format!("<port> must be in 1..65535, got {other}")),
//!             (name, _) => Err(format!("no such field '{name}'")),
//!         }
//!     }
//!
//!     fn get(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "host" => Some(FieldValue::Str(self.host.clone())),
//!             "port" => Some(FieldValue::Int(self.port)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```
//!
//! # Parsing
//!
//! [`SpecParser`] extracts the specification, builds the command line, and
//! populates a fresh configuration from the matches:
//!
//! ```
//! # use argspec::{ConfigSchema, FieldDescriptor, FieldValue, SpecParser};
//! # #[derive(Default)]
//! # struct Config { host: String, port: i64 }
//! # impl ConfigSchema for Config {
//! #     fn descriptors() -> Vec<FieldDescriptor> {
//! #         vec![
//! #             FieldDescriptor::new("host")
//! #                 .doc("str: Host name to bind.")
//! #                 .default(FieldValue::Str("localhost".to_string())),
//! #             FieldDescriptor::new("port").doc("int: Port to bind."),
//! #         ]
//! #     }
//! #     fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String> {
//! #         match (name, value) {
//! #             ("host", FieldValue::Str(s)) => { self.host = s; Ok(()) }
//! #             ("port", FieldValue::Int(n)) => { self.port = n; Ok(()) }
//! #             _ => Err("bad".to_string()),
//! #         }
//! #     }
//! #     fn get(&self, _name: &str) -> Option<FieldValue> { None }
//! # }
//! let config: Config = SpecParser::new()
//!     .unwrap()
//!     .app_name("server")
//!     .try_parse_from(["server", "--host", "example.org", "8080"])
//!     .unwrap();
//! assert_eq!(config.host, "example.org");
//! assert_eq!(config.port, 8080);
//! ```
//!
//! Required fields become positional arguments (switch that off with
//! [`SpecParser::positional_args`]); optional fields become `--name` options
//! with underscores dashed. Booleans are presence flags, and a boolean
//! defaulting to `true` is exposed as its `--no-` negation. Setter errors
//! abort the parse; field references in angle brackets (`<port>`) are
//! rewritten to the upper-cased names shown in the synopsis.
//!
//! Argument registration is pluggable per kind through [`ParserFactory`] and
//! [`SpecParser::factory`]. A populated configuration can be rendered for
//! logging with [`summarize`].

pub mod error;
mod factory;
mod parser;
mod rewrite;
mod schema;
mod spec;
mod summary;
mod value;

#[cfg(test)]
mod fixtures;

pub use error::ArgspecError;
pub use factory::{DefaultFactory, FactoryRegistry, ParserFactory};
pub use parser::SpecParser;
pub use schema::{ConfigSchema, FieldDescriptor, NO_DESCRIPTION};
pub use spec::ConfigSpec;
pub use summary::summarize;
pub use value::{ConfigKind, ConfigValue, EnumSpec, FieldValue, KindTag};
