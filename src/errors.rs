//! Centralized error types for the plugref crate
//!
//! This module defines all error types used across the crate,
//! providing a unified error handling interface.

use thiserror::Error;

/// Errors that can occur while parsing a plugin-type config value
// Display and Error are implemented by hand: thiserror's derive treats any
// field named `source` as the error source, which `&'static str` cannot be.
#[derive(Debug)]
pub enum ConfigError {
    UnknownSourceType(String),

    MissingField {
        field: &'static str,
        source: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownSourceType(source) => {
                write!(f, "Unknown plugin source type: '{source}'")
            }
            ConfigError::MissingField { field, source } => {
                write!(f, "Missing required field '{field}' for plugin source '{source}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while resolving a maven artifact override
///
/// A missing override key or a value under a different scheme is not an
/// error; those cases resolve to `None`. This error fires only when a
/// maven-scheme value fails to split into valid coordinates, which means
/// the deployment configuration itself is broken.
#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("Malformed maven artifact override '{value}' at property '{key}'")]
    Malformed { key: String, value: String },
}
