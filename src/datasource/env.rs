//! Environment backend (`env:<prefix>`).
//!
//! Snapshots the environment variables whose names start with `prefix` when
//! the source is built; later changes to the environment are not seen.
//! The prefix is stripped from parameter names, so with `env:APP_` the
//! variable `APP_REGION` becomes the parameter `REGION`.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{DataSource, MemorySource};
use crate::registry::BackendRegistry;
use crate::value::Value;

/// Scheme name for this backend.
pub const SCHEME: &str = "env";

/// Register the environment backend.
pub fn register(registry: &mut BackendRegistry) {
    registry.insert(SCHEME, Arc::new(open));
}

/// Constructor used by the registry.
pub fn open(location: &str) -> anyhow::Result<Box<dyn DataSource>> {
    Ok(Box::new(load(location)))
}

/// Snapshot the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
pub fn load(prefix: &str) -> MemorySource {
    let vars = std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
    from_vars(prefix, vars)
}

/// Build a source from explicit variables, keeping those under `prefix`.
pub fn from_vars<I>(prefix: &str, vars: I) -> MemorySource
where
    I: IntoIterator<Item = (String, String)>,
{
    let data: BTreeMap<String, Value> = vars
        .into_iter()
        .filter_map(|(name, value)| {
            let stripped = name.strip_prefix(prefix)?;
            (!stripped.is_empty()).then(|| (stripped.to_string(), Value::String(value)))
        })
        .collect();

    tracing::debug!(
        "Captured {} environment parameters with prefix {:?}",
        data.len(),
        prefix
    );
    MemorySource::from_map(format!("{}:{}", SCHEME, prefix), data)
}
