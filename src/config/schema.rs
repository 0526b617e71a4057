//! Configuration schema.
//!
//! ```yaml
//! # .paramchain.yml
//! data_sources:
//!   - yaml:params/production.yml
//!   - yaml:params/defaults.yml
//!   - env:APP_
//! output: json
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParamConfig {
    /// Data source strings in precedence order (first match wins).
    #[serde(default)]
    pub data_sources: Vec<String>,

    /// Default rendering for resolved values.
    #[serde(default)]
    pub output: OutputFormat,
}

impl ParamConfig {
    /// Data sources with `overrides` placed ahead of the configured ones.
    ///
    /// Sources given on the command line therefore take precedence over
    /// sources listed in the config file.
    pub fn data_sources_with(&self, overrides: &[String]) -> Vec<String> {
        overrides
            .iter()
            .chain(self.data_sources.iter())
            .cloned()
            .collect()
    }
}

/// How resolved values are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}
