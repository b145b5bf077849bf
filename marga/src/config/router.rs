//! Top-level router configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigError;
use super::search::SearchConfig;

/// Full router configuration loaded from YAML
///
/// ```yaml
/// search:
///   cost: weight
///   traversal: directed
///   max_iterations: 10000
/// log_routes: false
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Log every routed path at debug level
    #[serde(default = "defaults::enabled")]
    pub log_routes: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            log_routes: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_iterations == Some(0) {
            return Err(ConfigError::Validation(
                "search.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style setter for the search section.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
