//! JSON file backend (`json:<path>[:<key>]`).
//!
//! Same layout rules as the YAML backend; pointers are `{"$ref": "Name"}`.

use std::fs;
use std::sync::Arc;

use anyhow::Context;

use super::{select_mapping, split_path_key, DataSource, MemorySource};
use crate::registry::BackendRegistry;
use crate::value::Value;

/// Scheme name for this backend.
pub const SCHEME: &str = "json";

/// Register the JSON backend.
pub fn register(registry: &mut BackendRegistry) {
    registry.insert(SCHEME, Arc::new(open));
}

/// Constructor used by the registry.
pub fn open(location: &str) -> anyhow::Result<Box<dyn DataSource>> {
    Ok(Box::new(load(location)?))
}

/// Load a JSON data source from `<path>[:<key>]`.
pub fn load(location: &str) -> anyhow::Result<MemorySource> {
    let (path, key) = split_path_key(location);
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let source = parse(&content, key, &format!("{}:{}", SCHEME, location))?;
    tracing::debug!("Loaded {} parameters from {}", source.len(), location);
    Ok(source)
}

/// Parse JSON text into a data source labelled `label`.
pub fn parse(content: &str, key: Option<&str>, label: &str) -> anyhow::Result<MemorySource> {
    let document: serde_json::Value =
        serde_json::from_str(content).with_context(|| format!("Failed to parse JSON in {}", label))?;
    let data = select_mapping(Value::from_json(document), key, label)?;
    Ok(MemorySource::from_map(label, data))
}
