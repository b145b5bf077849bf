//! Configuration loading errors.

use thiserror::Error;

/// Errors raised while loading or validating a [`RouterConfig`](super::RouterConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The YAML could not be parsed or serialized.
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
