//! The ordered registry of configuration values for one configuration type,
//! plus the positional-order resolution used to register arguments.

use crate::error::ArgspecError;
use crate::value::ConfigValue;

/// A specification of a configuration to be parsed.
///
/// Names are unique; iteration follows declaration order, which also pins the
/// relative order of required values without an explicit position. Two specs
/// compare equal when they contain the same values, regardless of insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct ConfigSpec {
    values: Vec<ConfigValue>,
}

impl ConfigSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the specification.
    ///
    /// Fails with [`ArgspecError::DuplicateName`] when a value with the same
    /// name exists already, leaving the spec unchanged.
    pub fn add_config(&mut self, value: ConfigValue) -> Result<(), ArgspecError> {
        if self.values.iter().any(|v| v.name() == value.name()) {
            return Err(ArgspecError::DuplicateName(value.name().to_string()));
        }
        self.values.push(value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.iter().find(|v| v.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The names of all contained values, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.name()).collect()
    }

    /// Resolve the total order in which values are registered as arguments.
    ///
    /// Optional values sort first (they are named options, order only affects
    /// the synopsis). A required value with an explicit position takes that
    /// position; required values without one collapse onto the slot after the
    /// highest explicit position, keeping their declaration order among
    /// themselves.
    pub fn registration_order(&self) -> Vec<&ConfigValue> {
        let mut max_index: i64 = 0;
        let mut indices: Vec<Option<i64>> = Vec::with_capacity(self.values.len());
        for value in &self.values {
            if !value.required() {
                indices.push(Some(-1));
            } else if let Some(position) = value.position() {
                indices.push(Some(position as i64));
                max_index = max_index.max(position as i64);
            } else {
                indices.push(None);
            }
        }

        let mut ordered: Vec<(i64, &ConfigValue)> = self
            .values
            .iter()
            .zip(indices)
            .map(|(value, index)| (index.unwrap_or(max_index + 1), value))
            .collect();
        ordered.sort_by_key(|(index, _)| *index);
        ordered.into_iter().map(|(_, value)| value).collect()
    }
}

impl PartialEq for ConfigSpec {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self.values.iter().all(|v| other.values.contains(v))
    }
}

impl<'a> IntoIterator for &'a ConfigSpec {
    type Item = &'a ConfigValue;
    type IntoIter = std::slice::Iter<'a, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
