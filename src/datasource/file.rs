//! Single-file backend (`file:<name>:<path>`).
//!
//! Exposes one parameter, `name`, whose value is the contents of the file
//! at `path`. Handy for user data scripts, policies and certificates.

use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context};

use super::{DataSource, MemorySource};
use crate::registry::BackendRegistry;

/// Scheme name for this backend.
pub const SCHEME: &str = "file";

/// Register the file backend.
pub fn register(registry: &mut BackendRegistry) {
    registry.insert(SCHEME, Arc::new(open));
}

/// Constructor used by the registry.
pub fn open(location: &str) -> anyhow::Result<Box<dyn DataSource>> {
    Ok(Box::new(load(location)?))
}

/// Load `<name>:<path>` as a one-parameter source.
pub fn load(location: &str) -> anyhow::Result<MemorySource> {
    let Some((name, path)) = location.split_once(':') else {
        bail!(
            "Invalid file data source {:?}, expected \"<name>:<path>\"",
            location
        );
    };
    if name.is_empty() {
        bail!("Missing parameter name in file data source {:?}", location);
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    tracing::debug!("Loaded parameter {} from {} ({} bytes)", name, path, content.len());

    Ok(MemorySource::new(format!("{}:{}", SCHEME, location)).with(name, content))
}
