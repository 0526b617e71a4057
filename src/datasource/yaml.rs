//! YAML file backend (`yaml:<path>[:<key>]`).
//!
//! Parameters are the entries of the document's top-level mapping, or of
//! the mapping under `key` when one is given. Pointers are written as
//! `!Ref Name` or `{ $ref: Name }`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use super::{select_mapping, split_path_key, DataSource, MemorySource};
use crate::registry::BackendRegistry;
use crate::value::Value;

/// Scheme name for this backend.
pub const SCHEME: &str = "yaml";

/// Register the YAML backend.
pub fn register(registry: &mut BackendRegistry) {
    registry.insert(SCHEME, Arc::new(open));
}

/// Constructor used by the registry.
pub fn open(location: &str) -> anyhow::Result<Box<dyn DataSource>> {
    Ok(Box::new(load(location)?))
}

/// Load a YAML data source from `<path>[:<key>]`.
pub fn load(location: &str) -> anyhow::Result<MemorySource> {
    let (path, key) = split_path_key(location);
    let content = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read {}", path))?;
    let source = parse(&content, key, &format!("{}:{}", SCHEME, location))?;
    tracing::debug!("Loaded {} parameters from {}", source.len(), location);
    Ok(source)
}

/// Parse YAML text into a data source labelled `label`.
pub fn parse(content: &str, key: Option<&str>, label: &str) -> anyhow::Result<MemorySource> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(content).with_context(|| format!("Failed to parse YAML in {}", label))?;
    let document =
        Value::from_yaml(document).with_context(|| format!("Invalid parameter data in {}", label))?;
    let data = select_mapping(document, key, label)?;
    Ok(MemorySource::from_map(label, data))
}
