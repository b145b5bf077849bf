//! Router configuration.
//!
//! Loads all configuration from a single YAML file; every field has a
//! default, so a partial (or empty) document is valid.

mod defaults;
mod error;
mod router;
mod search;

pub use error::ConfigError;
pub use router::RouterConfig;
pub use search::{EdgeCost, SearchConfig, Traversal};
