//! Configuration loading for the `paramchain` command.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use paramchain::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "data_sources: [\"env:APP_\"]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.data_sources, vec!["env:APP_".to_string()]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{OutputFormat, ParamConfig};
