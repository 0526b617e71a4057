//! Parsing of `<scheme>:<location>` data source strings.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParamError, Result};

/// A parsed data source string.
///
/// Only the first colon separates scheme from location, so locations may
/// contain colons themselves (`yaml:params.yml:production`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Backend scheme, e.g. `yaml`.
    pub scheme: String,
    /// Backend-specific location, passed to the constructor untouched.
    pub location: String,
}

impl SourceSpec {
    /// Parse a data source string.
    pub fn parse(spec: &str) -> Result<Self> {
        match spec.split_once(':') {
            Some((scheme, location)) => Ok(Self {
                scheme: scheme.to_string(),
                location: location.to_string(),
            }),
            None => Err(ParamError::InvalidFormat {
                spec: spec.to_string(),
            }),
        }
    }
}

impl FromStr for SourceSpec {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.location)
    }
}
