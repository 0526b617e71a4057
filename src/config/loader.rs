//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ParamConfig;
use crate::error::{ParamError, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".paramchain.yml";

/// Find the project config file in `dir`, if present.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ParamConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ParamError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ParamError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config. `source_path` is used for errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ParamConfig> {
    if content.trim().is_empty() {
        return Ok(ParamConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ParamError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the project config in
/// `project_root` is used when present and defaults apply otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ParamConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Using config {}", path.display());
            load_config_file(&path)
        }
        None => Ok(ParamConfig::default()),
    }
}
