//! Data sources: named parameter stores behind a uniform lookup contract.
//!
//! Every backend implements [`DataSource`]. Collections only ever talk to
//! this trait, so storage (files, environment, memory) stays private to the
//! backend.
//!
//! # Built-in backends
//!
//! | Scheme | Location | Parameters |
//! |--------|----------|------------|
//! | `yaml` | `<path>[:<key>]` | top-level mapping (or the mapping under `key`) |
//! | `json` | `<path>[:<key>]` | same, for JSON |
//! | `file` | `<name>:<path>` | one parameter holding the file contents |
//! | `env`  | `<prefix>` | environment variables starting with `prefix` |
//!
//! `<key>` starts at the first colon of the location. A Windows drive
//! prefix such as `C:\` is part of the path, not a key separator.

pub mod env;
pub mod file;
pub mod json;
pub mod memory;
pub mod yaml;

pub use memory::MemorySource;

use std::collections::BTreeMap;

use anyhow::{anyhow, bail};

use crate::error::Result;
use crate::value::Value;

/// Read-only parameter lookup surface implemented by every backend.
///
/// The contents of a source must not change after construction.
pub trait DataSource: std::fmt::Debug + Send + Sync {
    /// Check if this source defines `name`.
    fn contains(&self, name: &str) -> bool;

    /// Get the raw value of `name`.
    ///
    /// Fails with [`crate::ParamError::KeyNotFound`] when the source does
    /// not define `name`; callers are expected to check [`contains`] first.
    ///
    /// [`contains`]: DataSource::contains
    fn get(&self, name: &str) -> Result<&Value>;

    /// Human-readable identity, e.g. `yaml:params.yml`.
    fn describe(&self) -> String;
}

/// Split `<path>[:<key>]` on the first colon after any drive prefix.
///
/// A leading `C:\` or `C:/` belongs to the path, so `C:\params.yml:prod`
/// reads `C:\params.yml` under key `prod`.
pub(crate) fn split_path_key(location: &str) -> (&str, Option<&str>) {
    let skip = drive_prefix_len(location);
    match location[skip..].split_once(':') {
        Some((path, key)) => (&location[..skip + path.len()], Some(key)),
        None => (location, None),
    }
}

fn drive_prefix_len(location: &str) -> usize {
    match location.as_bytes() {
        [letter, b':', b'\\' | b'/', ..] if letter.is_ascii_alphabetic() => 2,
        _ => 0,
    }
}

/// Select the parameter mapping from a parsed document.
///
/// With `key`, the document must be a mapping whose `key` entry is itself a
/// mapping. An empty document yields no parameters.
pub(crate) fn select_mapping(
    document: Value,
    key: Option<&str>,
    origin: &str,
) -> anyhow::Result<BTreeMap<String, Value>> {
    let mut root = match document {
        Value::Mapping(map) => map,
        Value::Null => BTreeMap::new(),
        other => bail!(
            "Expected a mapping at the top of {}, found a {}",
            origin,
            other.type_name()
        ),
    };

    let Some(key) = key else {
        return Ok(root);
    };

    match root.remove(key) {
        Some(Value::Mapping(map)) => Ok(map),
        Some(other) => Err(anyhow!(
            "Expected a mapping under key {} in {}, found a {}",
            key,
            origin,
            other.type_name()
        )),
        None => Err(anyhow!("Key {} not found in {}", key, origin)),
    }
}
