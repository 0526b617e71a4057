//! Backend registry: maps scheme names to data source constructors.
//!
//! A data source string such as `yaml:params.yml` is resolved by looking up
//! the `yaml` scheme here and calling its constructor with `params.yml`.
//!
//! Registration is explicit: each backend module exposes a `register`
//! function, and [`BackendRegistry::with_builtins`] calls them in turn.
//! Registering an already known scheme replaces the previous constructor
//! (last registration wins).
//!
//! # Process-wide registry
//!
//! [`global`] returns a snapshot of the process-wide registry, which starts
//! out with the built-in backends. [`register_global`] adds to it; do this
//! before building collections.
//!
//! # Example
//!
//! ```
//! use paramchain::datasource::MemorySource;
//! use paramchain::registry::BackendRegistry;
//!
//! let mut registry = BackendRegistry::with_builtins();
//! registry
//!     .register("static", |location: &str| {
//!         Ok(Box::new(MemorySource::new(format!("static:{location}")).with("Name", location)) as _)
//!     })
//!     .unwrap();
//!
//! assert!(registry.contains("static"));
//! assert!(registry.schemes().contains(&"yaml".to_string()));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use regex::Regex;

use crate::datasource::{self, DataSource};
use crate::error::{ParamError, Result};

/// Constructor building a data source from the location part of a data
/// source string.
pub type Constructor =
    Arc<dyn Fn(&str) -> anyhow::Result<Box<dyn DataSource>> + Send + Sync + 'static>;

static SCHEME_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.+-]*$").unwrap());

static GLOBAL: LazyLock<RwLock<BackendRegistry>> =
    LazyLock::new(|| RwLock::new(BackendRegistry::with_builtins()));

/// Check if `scheme` can be addressed from a data source string.
pub fn is_valid_scheme(scheme: &str) -> bool {
    SCHEME_NAME.is_match(scheme)
}

/// Registry of data source backends keyed by scheme name.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: HashMap<String, Constructor>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Create a registry with the `yaml`, `json`, `file` and `env` backends.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        datasource::yaml::register(&mut registry);
        datasource::json::register(&mut registry);
        datasource::file::register(&mut registry);
        datasource::env::register(&mut registry);
        registry
    }

    /// Register a backend constructor for `scheme`.
    ///
    /// Replaces any constructor previously registered for the same scheme.
    pub fn register<F>(&mut self, scheme: &str, constructor: F) -> Result<()>
    where
        F: Fn(&str) -> anyhow::Result<Box<dyn DataSource>> + Send + Sync + 'static,
    {
        if !is_valid_scheme(scheme) {
            return Err(ParamError::InvalidSchemeName {
                scheme: scheme.to_string(),
            });
        }
        self.insert(scheme, Arc::new(constructor));
        Ok(())
    }

    /// Insert a constructor for a scheme name known to be valid.
    pub(crate) fn insert(&mut self, scheme: &str, constructor: Constructor) {
        debug_assert!(is_valid_scheme(scheme), "invalid scheme {scheme:?}");
        if self
            .backends
            .insert(scheme.to_string(), constructor)
            .is_some()
        {
            tracing::debug!("Replaced data source backend for scheme {}", scheme);
        } else {
            tracing::trace!("Registered data source backend for scheme {}", scheme);
        }
    }

    /// Look up the constructor for `scheme`.
    pub fn lookup(&self, scheme: &str) -> Result<&Constructor> {
        self.backends
            .get(scheme)
            .ok_or_else(|| ParamError::UnknownScheme {
                scheme: scheme.to_string(),
                known: self.schemes(),
            })
    }

    /// Build a data source for `scheme` at `location`.
    ///
    /// Constructor failures are wrapped in
    /// [`ParamError::BackendConstruction`] with the location attached.
    pub fn open(&self, scheme: &str, location: &str) -> Result<Box<dyn DataSource>> {
        let constructor = self.lookup(scheme)?;
        constructor(location).map_err(|source| ParamError::BackendConstruction {
            scheme: scheme.to_string(),
            location: location.to_string(),
            source,
        })
    }

    /// Check if a backend is registered for `scheme`.
    pub fn contains(&self, scheme: &str) -> bool {
        self.backends.contains_key(scheme)
    }

    /// All registered scheme names, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.backends.keys().cloned().collect();
        schemes.sort();
        schemes
    }

    /// Get the number of registered backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

/// Snapshot of the process-wide registry.
pub fn global() -> BackendRegistry {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Register a backend in the process-wide registry.
pub fn register_global<F>(scheme: &str, constructor: F) -> Result<()>
where
    F: Fn(&str) -> anyhow::Result<Box<dyn DataSource>> + Send + Sync + 'static,
{
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(scheme, constructor)
}
