//! Log source trait abstraction.

use async_trait::async_trait;
use ojt_core::{DailyLog, HiringStatus, TraineeId, WorkSchedule};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading or writing log data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Read-only source of attendance snapshots.
///
/// Implementations return the current state on every call; callers re-run
/// the accrual pipeline on whatever they get back.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Load every daily log of a trainee, newest first.
    async fn load_logs(&self, trainee: TraineeId) -> Result<Vec<DailyLog>>;

    /// Load the hiring status of a trainee, if the trainee is known.
    async fn load_hiring_status(&self, trainee: TraineeId) -> Result<Option<HiringStatus>>;

    /// Load the employer work schedule that applies to a trainee.
    async fn load_work_schedule(&self, trainee: TraineeId) -> Result<Option<WorkSchedule>>;

    /// List trainees with logs on record.
    async fn list_trainees(&self) -> Result<Vec<TraineeId>>;
}
