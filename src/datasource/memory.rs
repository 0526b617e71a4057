//! In-memory data source.

use std::collections::BTreeMap;

use super::DataSource;
use crate::error::{ParamError, Result};
use crate::value::Value;

/// A data source backed by an in-process mapping.
///
/// The file and environment backends build one of these after loading;
/// it is also the natural choice for programmatic use and tests.
///
/// # Example
///
/// ```
/// use paramchain::datasource::{DataSource, MemorySource};
/// use paramchain::Value;
///
/// let source = MemorySource::new("defaults")
///     .with("Region", "us-east-1")
///     .with("DefaultRegion", Value::pointer("Region"));
///
/// assert!(source.contains("Region"));
/// assert!(source.get("Missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    label: String,
    data: BTreeMap<String, Value>,
}

impl MemorySource {
    /// Create an empty source identified by `label` in diagnostics.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: BTreeMap::new(),
        }
    }

    /// Create a source from an existing mapping.
    pub fn from_map(label: impl Into<String>, data: BTreeMap<String, Value>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Number of parameters defined.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if no parameters are defined.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over parameter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl DataSource for MemorySource {
    fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    fn get(&self, name: &str) -> Result<&Value> {
        self.data.get(name).ok_or_else(|| ParamError::KeyNotFound {
            name: name.to_string(),
            source_name: self.label.clone(),
        })
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_source_is_empty() {
        let source = MemorySource::new("empty");
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
        assert_eq!(source.describe(), "empty");
    }

    #[test]
    fn with_adds_parameters() {
        let source = MemorySource::new("m").with("a", 1i64).with("b", "two");
        assert_eq!(source.len(), 2);
        assert!(source.contains("a"));
        assert_eq!(source.get("b").unwrap(), &Value::from("two"));
    }

    #[test]
    fn get_missing_fails_loudly() {
        let source = MemorySource::new("m");
        let err = source.get("nope").unwrap_err();
        assert!(matches!(
            err,
            ParamError::KeyNotFound { ref name, ref source_name } if name == "nope" && source_name == "m"
        ));
    }

    #[test]
    fn names_are_sorted() {
        let source = MemorySource::new("m").with("b", 1i64).with("a", 2i64);
        assert_eq!(source.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn lookup_does_not_mutate() {
        let source = MemorySource::new("m").with("a", Value::pointer("b"));
        let first = source.get("a").unwrap().clone();
        let second = source.get("a").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(source.len(), 1);
    }
}
