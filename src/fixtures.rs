//! Shared configuration types used across the test suites.

pub(crate) mod test {
    use std::collections::BTreeMap;

    use crate::schema::{ConfigSchema, FieldDescriptor};
    use crate::value::{ConfigKind, EnumSpec, FieldValue};

    /// Small three-field configuration exercising the kind resolution
    /// rules: an exhaustive enum, an undocumented string, and a doc-typed
    /// real with a default.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SampleConfig {
        pub x: i64,
        pub y: String,
        pub z: f64,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                x: 1,
                y: String::new(),
                z: 666.666,
            }
        }
    }

    impl ConfigSchema for SampleConfig {
        fn descriptors() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::new("x")
                    .doc("Prop x.")
                    .values(EnumSpec::new(
                        "SampleOption",
                        [
                            ("UNO", FieldValue::Int(1)),
                            ("DOS", FieldValue::Int(2)),
                            ("TRES", FieldValue::Int(3)),
                        ],
                    ))
                    .default(FieldValue::Int(1)),
                FieldDescriptor::new("y"),
                FieldDescriptor::new("z")
                    .doc("float: Prop z.")
                    .default(FieldValue::Real(666.666)),
            ]
        }

        fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String> {
            match (name, value) {
                ("x", FieldValue::Int(n)) if (1..=3).contains(&n) => {
                    self.x = n;
                    Ok(())
                }
                ("x", other) => Err(format!("value {other} is not admissible for <x>")),
                ("y", FieldValue::Str(s)) => {
                    self.y = s;
                    Ok(())
                }
                ("z", FieldValue::Real(r)) => {
                    self.z = r;
                    Ok(())
                }
                (name, other) => Err(format!("cannot assign {other} to '{name}'")),
            }
        }

        fn get(&self, name: &str) -> Option<FieldValue> {
            match name {
                "x" => Some(FieldValue::Int(self.x)),
                "y" if !self.y.is_empty() => Some(FieldValue::Str(self.y.clone())),
                "z" => Some(FieldValue::Real(self.z)),
                _ => None,
            }
        }
    }

    /// Three required strings with pinned positions, for the positional
    /// ordering tests.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RoutingConfig {
        pub a: String,
        pub b: String,
        pub c: String,
    }

    impl ConfigSchema for RoutingConfig {
        fn descriptors() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::new("a").doc("Prop a.").position(1),
                FieldDescriptor::new("b").doc("Prop b.").position(2),
                FieldDescriptor::new("c").doc("Prop c.").position(0),
            ]
        }

        fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String> {
            let FieldValue::Str(s) = value else {
                return Err(format!("'{name}' takes a string"));
            };
            match name {
                "a" => self.a = s,
                "b" => self.b = s,
                "c" => self.c = s,
                _ => return Err(format!("no such field '{name}'")),
            }
            Ok(())
        }

        fn get(&self, name: &str) -> Option<FieldValue> {
            match name {
                "a" => Some(FieldValue::Str(self.a.clone())),
                "b" => Some(FieldValue::Str(self.b.clone())),
                "c" => Some(FieldValue::Str(self.c.clone())),
                _ => None,
            }
        }
    }

    /// Wider configuration covering every built-in kind, with a validating
    /// port setter. All fields are optional.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ServerConfig {
        pub host: String,
        pub port: i64,
        pub debug: bool,
        pub cache: bool,
        pub max_connections: i64,
        pub tags: Vec<String>,
        pub limits: BTreeMap<String, i64>,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                host: "localhost".to_string(),
                port: 8080,
                debug: false,
                cache: true,
                max_connections: 32,
                tags: Vec::new(),
                limits: BTreeMap::new(),
            }
        }
    }

    impl ConfigSchema for ServerConfig {
        fn descriptors() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::new("host")
                    .doc("str: Host name to bind.")
                    .default(FieldValue::Str("localhost".to_string())),
                FieldDescriptor::new("port")
                    .doc("int: Port to bind.")
                    .default(FieldValue::Int(8080)),
                FieldDescriptor::new("debug")
                    .doc("bool: Enable verbose diagnostics.")
                    .default(FieldValue::Bool(false)),
                FieldDescriptor::new("cache")
                    .doc("bool: Cache responses.")
                    .default(FieldValue::Bool(true)),
                FieldDescriptor::new("max_connections")
                    .doc("int: Connection limit.")
                    .default(FieldValue::Int(32)),
                FieldDescriptor::new("tags")
                    .kind(ConfigKind::List)
                    .doc("Tags applied to this instance.")
                    .default(FieldValue::List(serde_yaml::Sequence::new())),
                FieldDescriptor::new("limits")
                    .kind(ConfigKind::Map)
                    .doc("Per-resource limits.")
                    .default(FieldValue::Map(serde_yaml::Mapping::new())),
            ]
        }

        fn set(&mut self, name: &str, value: FieldValue) -> Result<(), String> {
            match (name, value) {
                ("host", FieldValue::Str(s)) => {
                    self.host = s;
                    Ok(())
                }
                ("port", FieldValue::Int(n)) if (1..=65535).contains(&n) => {
                    self.port = n;
                    Ok(())
                }
                ("port", other) => Err(format!("<port> must be in 1..65535, got {other}")),
                ("debug", FieldValue::Bool(b)) => {
                    self.debug = b;
                    Ok(())
                }
                ("cache", FieldValue::Bool(b)) => {
                    self.cache = b;
                    Ok(())
                }
                ("max_connections", FieldValue::Int(n)) if n > 0 => {
                    self.max_connections = n;
                    Ok(())
                }
                ("tags", FieldValue::List(seq)) => {
                    let mut tags = Vec::with_capacity(seq.len());
                    for item in seq {
                        match item.as_str() {
                            Some(s) => tags.push(s.to_string()),
                            None => return Err("every entry of <tags> must be a string".to_string()),
                        }
                    }
                    self.tags = tags;
                    Ok(())
                }
                ("limits", FieldValue::Map(mapping)) => {
                    let mut limits = BTreeMap::new();
                    for (key, val) in mapping {
                        match (key.as_str(), val.as_i64()) {
                            (Some(k), Some(v)) => {
                                limits.insert(k.to_string(), v);
                            }
                            _ => {
                                return Err(
                                    "<limits> must map resource names to integers".to_string()
                                )
                            }
                        }
                    }
                    self.limits = limits;
                    Ok(())
                }
                (name, other) => Err(format!("cannot assign {other} to '{name}'")),
            }
        }

        fn get(&self, name: &str) -> Option<FieldValue> {
            match name {
                "host" => Some(FieldValue::Str(self.host.clone())),
                "port" => Some(FieldValue::Int(self.port)),
                "debug" => Some(FieldValue::Bool(self.debug)),
                "cache" => Some(FieldValue::Bool(self.cache)),
                "max_connections" => Some(FieldValue::Int(self.max_connections)),
                "tags" => Some(FieldValue::List(
                    self.tags
                        .iter()
                        .map(|t| serde_yaml::Value::String(t.clone()))
                        .collect(),
                )),
                "limits" => Some(FieldValue::Map(
                    self.limits
                        .iter()
                        .map(|(k, v)| {
                            (
                                serde_yaml::Value::String(k.clone()),
                                serde_yaml::Value::Number((*v).into()),
                            )
                        })
                        .collect(),
                )),
                _ => None,
            }
        }
    }
}
