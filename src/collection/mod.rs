//! Ordered data source collections and parameter resolution.
//!
//! A [`DataSourceCollection`] is built from `<scheme>:<location>` strings.
//! Lookup scans the sources in the order they were given; the first source
//! defining a parameter wins, even if later sources define it too.
//!
//! # Pointers
//!
//! [`DataSourceCollection::get_parameter_recursive`] follows
//! [`Value::Pointer`] values across the whole collection until it reaches a
//! non-pointer value. Pointers directly inside a sequence are resolved as
//! well; deeper structures are returned as-is. A pointer chain that comes
//! back to a parameter it is still resolving fails with
//! [`ParamError::CircularReference`]. Sequences reached through sequence
//! elements may nest at most [`MAX_SEQUENCE_DEPTH`] levels.
//!
//! # Example
//!
//! ```
//! use paramchain::collection::DataSourceCollection;
//! use paramchain::datasource::MemorySource;
//! use paramchain::Value;
//!
//! let overrides = MemorySource::new("overrides").with("Stage", "prod");
//! let defaults = MemorySource::new("defaults")
//!     .with("Stage", "dev")
//!     .with("Environment", Value::pointer("Stage"));
//!
//! let collection =
//!     DataSourceCollection::from_sources(vec![Box::new(overrides), Box::new(defaults)]);
//!
//! assert_eq!(
//!     collection.get_parameter_recursive("Environment").unwrap(),
//!     Value::from("prod")
//! );
//! assert!(!collection.contains("Missing"));
//! ```

pub mod spec;

pub use spec::SourceSpec;

use std::collections::HashSet;

use crate::datasource::DataSource;
use crate::error::{ParamError, Result};
use crate::registry::{self, BackendRegistry};
use crate::value::Value;

/// How many sequences may be nested through pointers during one lookup.
pub const MAX_SEQUENCE_DEPTH: usize = 64;

/// Ordered collection of data sources.
#[derive(Debug, Default)]
pub struct DataSourceCollection {
    sources: Vec<Box<dyn DataSource>>,
}

impl DataSourceCollection {
    /// Build a collection using the process-wide backend registry.
    pub fn new<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_registry(&registry::global(), specs)
    }

    /// Build a collection using `registry`.
    ///
    /// Fails on the first entry that is malformed, names an unknown scheme
    /// or cannot be loaded; no partial collection is returned.
    pub fn with_registry<I, S>(registry: &BackendRegistry, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sources = Vec::new();
        for spec in specs {
            let spec = SourceSpec::parse(spec.as_ref())?;
            let source = registry.open(&spec.scheme, &spec.location)?;
            tracing::debug!("Added data source {}", source.describe());
            sources.push(source);
        }
        Ok(Self { sources })
    }

    /// Build a collection from already constructed sources, in order.
    pub fn from_sources(sources: Vec<Box<dyn DataSource>>) -> Self {
        Self { sources }
    }

    /// Look up `name` without following pointers.
    pub fn get_parameter(&self, name: &str) -> Result<&Value> {
        match self.sources.iter().find(|source| source.contains(name)) {
            Some(source) => source.get(name),
            None => Err(ParamError::UnknownParameter {
                name: name.to_string(),
                sources: self.describe_sources(),
            }),
        }
    }

    /// Look up `name`, following pointers until a terminal value is reached.
    pub fn get_parameter_recursive(&self, name: &str) -> Result<Value> {
        let mut chain = ResolutionChain::default();
        self.resolve(name, &mut chain, 0)
    }

    /// Check if `name` resolves, pointers included.
    pub fn contains(&self, name: &str) -> bool {
        self.get_parameter_recursive(name).is_ok()
    }

    /// Direct pointers are followed iteratively, so chain length is bounded
    /// only by memory. Only sequence elements recurse, up to
    /// [`MAX_SEQUENCE_DEPTH`] levels.
    fn resolve<'a>(
        &'a self,
        name: &'a str,
        chain: &mut ResolutionChain,
        depth: usize,
    ) -> Result<Value> {
        let base = chain.len();
        let mut current = name;
        let value = loop {
            chain.enter(current)?;
            match self.get_parameter(current)? {
                Value::Pointer(target) => {
                    tracing::trace!("Following pointer {} → {}", current, target);
                    current = target.as_str();
                }
                other => break other,
            }
        };

        let resolved = match value {
            Value::Sequence(items) => {
                if depth >= MAX_SEQUENCE_DEPTH && items.iter().any(Value::is_pointer) {
                    return Err(ParamError::ReferenceDepthExceeded {
                        name: current.to_string(),
                        limit: MAX_SEQUENCE_DEPTH,
                    });
                }
                items
                    .iter()
                    .map(|item| match item {
                        Value::Pointer(target) => {
                            tracing::trace!("Following pointer {}[] → {}", current, target);
                            self.resolve(target, chain, depth + 1)
                        }
                        other => Ok(other.clone()),
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Sequence)
            }
            terminal => Ok(terminal.clone()),
        };

        chain.truncate(base);
        resolved
    }

    /// Diagnostic names of the sources, in lookup order.
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources.iter().map(|source| source.describe()).collect()
    }

    /// Iterate over the sources in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DataSource> {
        self.sources.iter().map(|source| source.as_ref())
    }

    /// Get the number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the collection has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Names currently being resolved, in the order they were entered.
#[derive(Debug, Default)]
struct ResolutionChain {
    names: Vec<String>,
    active: HashSet<String>,
}

impl ResolutionChain {
    fn enter(&mut self, name: &str) -> Result<()> {
        let fresh = self.active.insert(name.to_string());
        self.names.push(name.to_string());
        if fresh {
            Ok(())
        } else {
            Err(ParamError::CircularReference {
                chain: self.names.join(" → "),
            })
        }
    }

    fn len(&self) -> usize {
        self.names.len()
    }

    fn truncate(&mut self, len: usize) {
        for name in self.names.drain(len..) {
            self.active.remove(&name);
        }
    }
}
