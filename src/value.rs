//! Parameter values held by data sources.
//!
//! A [`Value`] is either a literal (scalar, sequence or mapping) or a
//! [`Value::Pointer`], which names another parameter to resolve in its place.
//!
//! # Pointer syntax in data files
//!
//! ```yaml
//! Subnet: !Ref PrivateSubnet        # YAML tag
//! Subnets:
//!   - { $ref: PrivateSubnet }       # single-key mapping, also valid JSON
//!   - subnet-literal
//! ```

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping key that marks a pointer in YAML and JSON data.
pub const POINTER_KEY: &str = "$ref";

/// YAML tag that marks a pointer (`!Ref name`).
pub const POINTER_TAG: &str = "Ref";

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    /// Unsigned integer too large for [`Value::Integer`].
    UInteger(u64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
    /// Re-resolve the named parameter instead of using this value.
    Pointer(String),
}

impl Value {
    /// Create a pointer to another parameter.
    pub fn pointer(name: impl Into<String>) -> Self {
        Self::Pointer(name.into())
    }

    /// Check if this value is a pointer.
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// The parameter a pointer refers to.
    pub fn pointer_target(&self) -> Option<&str> {
        match self {
            Self::Pointer(name) => Some(name),
            _ => None,
        }
    }

    /// Get as string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) | Self::UInteger(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Pointer(_) => "pointer",
        }
    }

    /// Convert a parsed YAML value, recognising `!Ref` tags and `$ref` mappings.
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value as Yaml;

        Ok(match value {
            Yaml::Null => Self::Null,
            Yaml::Bool(b) => Self::Bool(b),
            Yaml::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInteger(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Yaml::String(s) => Self::String(s),
            Yaml::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::from_yaml)
                    .collect::<Result<_>>()?,
            ),
            Yaml::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (key, value) in map {
                    entries.insert(yaml_key(key)?, Self::from_yaml(value)?);
                }
                Self::from_entries(entries)
            }
            Yaml::Tagged(tagged) => {
                if tagged.tag != POINTER_TAG {
                    bail!("Unsupported YAML tag {}", tagged.tag);
                }
                match tagged.value {
                    Yaml::String(name) => Self::Pointer(name),
                    other => bail!(
                        "!{} expects a parameter name, got {:?}",
                        POINTER_TAG,
                        other
                    ),
                }
            }
        })
    }

    /// Convert a parsed JSON value, recognising `{"$ref": name}` objects.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInteger(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Sequence(items.into_iter().map(Self::from_json).collect()),
            Json::Object(map) => Self::from_entries(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    fn from_entries(entries: BTreeMap<String, Value>) -> Self {
        if entries.len() == 1 {
            if let Some(Self::String(name)) = entries.get(POINTER_KEY) {
                return Self::Pointer(name.clone());
            }
        }
        Self::Mapping(entries)
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        other => bail!("Unsupported mapping key {:?}", other),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::UInteger(n) => serializer.serialize_u64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(entries) => serializer.collect_map(entries),
            Self::Pointer(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(POINTER_KEY, name)?;
                map.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Self::Integer(i),
            Err(_) => Self::UInteger(n),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}
