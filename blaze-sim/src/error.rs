//! Error taxonomy for simulation runs.

use thiserror::Error;

/// Errors surfaced by the orchestrator and aggregator.
///
/// All variants are non-retryable: either a full 10,000-iteration report
/// is produced or no report is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("team '{id}' not found in reference data")]
    UnknownTeam { id: String },
    #[error("unknown scenario type '{name}'")]
    UnknownScenario { name: String },
    #[error("cannot aggregate an empty result set")]
    EmptyResultSet,
    #[error("invalid scenario parameters: {message}")]
    InvalidParameters { message: String },
}
