use thiserror::Error;
use ur_02_balance_reducer::{ConfigError, ReduceError};

/// Failure of pipeline configuration or of one chain event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("failed to parse pipeline config: {0}")]
    Parse(String),

    #[error("reducer #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate reducer name {name:?}")]
    DuplicateName { name: String },

    #[error("reducer {name:?} is misconfigured: {source}")]
    InvalidReducer {
        name: String,
        #[source]
        source: ConfigError,
    },

    /// The event produced no storage events at all.
    #[error("reducer {reducer:?} failed: {source}")]
    Reduce {
        reducer: String,
        #[source]
        source: ReduceError,
    },
}

impl PipelineError {
    /// Name of the reducer instance involved, when there is one.
    pub fn reducer(&self) -> Option<&str> {
        match self {
            PipelineError::InvalidReducer { name, .. } | PipelineError::DuplicateName { name } => {
                Some(name)
            }
            PipelineError::Reduce { reducer, .. } => Some(reducer),
            _ => None,
        }
    }
}
