//! Engine error types.

use ojt_storage::StorageError;

/// Errors raised by the accrual engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A configured constant is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required input was absent
    #[error("missing input: {0}")]
    MissingInput(String),
}

/// Errors raised while building progress from a log source.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Log source failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Engine failure
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Trainee has no hiring record
    #[error("no hiring record for trainee {0}")]
    UnknownTrainee(ojt_core::TraineeId),
}
