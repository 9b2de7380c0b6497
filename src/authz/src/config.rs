//! Authorizer configuration
//!
//! Configuration is a plain value handed to constructors; nothing reads it
//! from global state.
//!
//! Environment variables:
//! - `ROLEMASK_HIERARCHY` - path to a JSON hierarchy file
//! - `ROLEMASK_STRICT_NAMES` - validate role names before compiling (default: true)

use crate::error::{AuthzError, Result};
use std::path::PathBuf;

/// Environment variable holding the hierarchy file path
pub const HIERARCHY_VAR: &str = "ROLEMASK_HIERARCHY";

/// Environment variable toggling role name validation
pub const STRICT_NAMES_VAR: &str = "ROLEMASK_STRICT_NAMES";

/// Authorizer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerConfig {
    /// Hierarchy file to load roles from
    pub hierarchy_path: Option<PathBuf>,

    /// Reject empty or whitespace-containing role names
    pub strict_names: bool,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            hierarchy_path: None,
            strict_names: true,
        }
    }
}

impl AuthorizerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from key/value pairs
    ///
    /// Unknown keys are ignored. Present but malformed values are errors.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                HIERARCHY_VAR if !value.is_empty() => {
                    config.hierarchy_path = Some(PathBuf::from(value));
                }
                STRICT_NAMES_VAR if !value.is_empty() => {
                    config.strict_names = parse_bool(STRICT_NAMES_VAR, value)?;
                }
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn with_hierarchy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.hierarchy_path = Some(path.into());
        self
    }

    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AuthzError::config(format!(
            "Environment variable '{}' is invalid: '{}'",
            name, value
        ))),
    }
}
