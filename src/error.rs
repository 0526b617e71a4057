//! Error types for paramchain operations.
//!
//! This module defines [`ParamError`], the error type returned by the
//! backend registry, data sources and collections, and a [`Result`] type
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant names the offending identifier (scheme, parameter, spec)
//! - Backend constructors return `anyhow::Error`, which is kept opaque as
//!   the source of [`ParamError::BackendConstruction`]
//! - Nothing is retried or defaulted; errors always reach the caller

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for paramchain operations.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A data source string is not shaped `<scheme>:<location>`.
    #[error("Invalid data source format {spec:?}. Data source should be \"<scheme>:<location>\"")]
    InvalidFormat { spec: String },

    /// The scheme prefix has no registered backend.
    #[error("Unknown data source {scheme}, valid data sources are {}", .known.join(", "))]
    UnknownScheme { scheme: String, known: Vec<String> },

    /// A scheme name that can never be addressed from a data source string.
    #[error("Invalid scheme name {scheme:?}: expected a letter followed by letters, digits, '_', '.', '+' or '-'")]
    InvalidSchemeName { scheme: String },

    /// No source in the collection defines the parameter.
    #[error("Unable to find parameter {name} in any of the data sources [{}]", .sources.join(", "))]
    UnknownParameter { name: String, sources: Vec<String> },

    /// A single data source was asked for a key it does not hold.
    #[error("Key {name} not found in data source {source_name}")]
    KeyNotFound { name: String, source_name: String },

    /// Pointer chain revisits a parameter that is already being resolved.
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },

    /// Sequences reach other sequences through pointers too many levels deep.
    #[error("Reference depth exceeded resolving {name}: sequences nest more than {limit} levels through pointers")]
    ReferenceDepthExceeded { name: String, limit: usize },

    /// The backend constructor failed for this location.
    #[error("Failed to load data source {scheme}:{location}: {source:#}")]
    BackendConstruction {
        scheme: String,
        location: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for paramchain operations.
pub type Result<T> = std::result::Result<T, ParamError>;
