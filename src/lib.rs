//! paramchain - Ordered data sources and recursive parameter resolution.
//!
//! paramchain aggregates named, ordered data sources (YAML and JSON files,
//! single files, the environment, or custom backends) behind one lookup
//! facade. Parameters may point at other parameters; lookups follow those
//! pointers until they reach a concrete value.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`collection`] - Ordered data source collections and resolution
//! - [`config`] - Configuration loading
//! - [`datasource`] - The data source contract and built-in backends
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Scheme-to-backend registry
//! - [`ui`] - Terminal output
//! - [`value`] - Parameter values and pointers
//!
//! # Example
//!
//! ```
//! use paramchain::collection::DataSourceCollection;
//! use paramchain::datasource::MemorySource;
//! use paramchain::Value;
//!
//! let source = MemorySource::new("inline")
//!     .with("P1", Value::pointer("P2"))
//!     .with("P2", Value::pointer("P3"))
//!     .with("P3", 42i64);
//! let collection = DataSourceCollection::from_sources(vec![Box::new(source)]);
//!
//! assert_eq!(collection.get_parameter_recursive("P1").unwrap(), Value::Integer(42));
//! ```
//!
//! For file-backed sources, see the integration tests.

pub mod cli;
pub mod collection;
pub mod config;
pub mod datasource;
pub mod error;
pub mod registry;
pub mod ui;
pub mod value;

pub use collection::DataSourceCollection;
pub use datasource::DataSource;
pub use error::{ParamError, Result};
pub use registry::BackendRegistry;
pub use value::Value;
