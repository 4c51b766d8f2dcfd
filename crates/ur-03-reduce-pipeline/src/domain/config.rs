//! # Pipeline Configuration
//!
//! ```json
//! {
//!   "parallel": false,
//!   "reducers": [
//!     { "name": "by_address", "addressType": "payment", "prefix": "balance_by_address" },
//!     { "name": "by_stake", "addressType": "stake", "table": "balance_by_stake_address" }
//!   ]
//! }
//! ```
//!
//! Order of `reducers` is the order their commands appear within a block.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use ur_02_balance_reducer::ReducerConfig;

use super::errors::PipelineError;

/// One named reducer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedReducerConfig {
    /// Label for logs and metrics.
    pub name: String,
    #[serde(flatten)]
    pub config: ReducerConfig,
}

impl NamedReducerConfig {
    pub fn new(name: impl Into<String>, config: ReducerConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    #[serde(default)]
    pub reducers: Vec<NamedReducerConfig>,
    /// Evaluate reducers on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
}

impl PipelineConfig {
    pub fn new(reducers: Vec<NamedReducerConfig>) -> Self {
        Self {
            reducers,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| PipelineError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig =
            serde_json::from_str(content).map_err(|e| PipelineError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Names non-empty and unique; every reducer's own options valid.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let mut seen = HashSet::new();

        for (index, named) in self.reducers.iter().enumerate() {
            if named.name.trim().is_empty() {
                return Err(PipelineError::EmptyName { index });
            }
            if !seen.insert(named.name.as_str()) {
                return Err(PipelineError::DuplicateName {
                    name: named.name.clone(),
                });
            }
            named
                .config
                .backend()
                .map_err(|source| PipelineError::InvalidReducer {
                    name: named.name.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}
