//! # UTxO Reducer Telemetry
//!
//! Logging setup and Prometheus metrics shared by the reducer crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ur_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Reductions now log and count
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `UR_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `UR_JSON_LOGS` | `false` | JSON log lines |
//! | `UR_SERVICE_NAME` | `utxo-reducers` | Service name in startup log |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{gather_metrics, record_block, record_reduction, register_metrics, ReducerCounts};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}
