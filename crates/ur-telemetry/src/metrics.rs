//! Prometheus metrics for the reduce stage.
//!
//! All metrics follow the naming convention: `ur_reduce_<metric>_total`.
//! Per-reducer counters are labelled with the reducer instance name from
//! the pipeline configuration.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Registry holding only the reduce-stage metrics
    pub static ref REGISTRY: Registry = Registry::new();

    /// Blocks processed, by direction (apply/undo) plus resets
    pub static ref BLOCKS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("ur_reduce_blocks_total", "Chain events processed by the reduce stage"),
        &["direction"]
    ).expect("metric creation failed");

    /// Storage commands emitted per reducer
    pub static ref COMMANDS_EMITTED: IntCounterVec = IntCounterVec::new(
        Opts::new("ur_reduce_commands_emitted_total", "Storage commands emitted"),
        &["reducer"]
    ).expect("metric creation failed");

    /// Inputs skipped because the spent output was not resolved
    pub static ref UNRESOLVED_INPUTS: IntCounterVec = IntCounterVec::new(
        Opts::new(
            "ur_reduce_unresolved_inputs_total",
            "Inputs whose spent output was not resolved; each is a spend not reflected"
        ),
        &["reducer"]
    ).expect("metric creation failed");

    /// Outputs without a key under the reducer's mode
    pub static ref EXCLUDED_OUTPUTS: IntCounterVec = IntCounterVec::new(
        Opts::new("ur_reduce_excluded_outputs_total", "Outputs excluded by address mode"),
        &["reducer"]
    ).expect("metric creation failed");

    /// Undecodable addresses skipped under the lenient policy
    pub static ref DECODE_FAILURES: IntCounterVec = IntCounterVec::new(
        Opts::new("ur_reduce_decode_failures_total", "Undecodable addresses skipped"),
        &["reducer"]
    ).expect("metric creation failed");
}

lazy_static! {
    /// Outcome of the one-time registration with [`REGISTRY`]
    static ref REGISTERED: Result<(), String> = register_all();
}

fn register_all() -> Result<(), String> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(BLOCKS_TOTAL.clone()),
        Box::new(COMMANDS_EMITTED.clone()),
        Box::new(UNRESOLVED_INPUTS.clone()),
        Box::new(EXCLUDED_OUTPUTS.clone()),
        Box::new(DECODE_FAILURES.clone()),
    ];

    for metric in metrics {
        REGISTRY.register(metric).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Register all metrics with [`REGISTRY`]. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    REGISTERED.clone().map_err(TelemetryError::MetricsInit)
}

/// Per-reducer counts from one block reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReducerCounts {
    pub commands: u64,
    pub unresolved_inputs: u64,
    pub excluded: u64,
    pub decode_failures: u64,
}

/// Count one processed chain event.
pub fn record_block(direction: &str) {
    BLOCKS_TOTAL.with_label_values(&[direction]).inc();
}

/// Add one reducer's counts for a block.
pub fn record_reduction(reducer: &str, counts: ReducerCounts) {
    COMMANDS_EMITTED
        .with_label_values(&[reducer])
        .inc_by(counts.commands);
    UNRESOLVED_INPUTS
        .with_label_values(&[reducer])
        .inc_by(counts.unresolved_inputs);
    EXCLUDED_OUTPUTS
        .with_label_values(&[reducer])
        .inc_by(counts.excluded);
    DECODE_FAILURES
        .with_label_values(&[reducer])
        .inc_by(counts.decode_failures);
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    register_metrics()?;

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
