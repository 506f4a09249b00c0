//! Training hours accrual and completion projection.
//!
//! Pure functions over log snapshots: accrual, progress against the required
//! hours, projected end date and date-range views. The async tracker only
//! fetches snapshots from a [`ojt_storage::LogSource`] and feeds them through
//! the same functions.

#![warn(missing_docs)]

pub mod error;
pub mod config;
pub mod aggregator;
pub mod calculator;
pub mod estimator;
pub mod filter;
pub mod hours;
pub mod validator;
pub mod placement;
pub mod report;
pub mod tracker;

pub use error::{EngineError, TrackerError};
pub use config::{EngineConfig, ProjectionConfig, WorkingWindows, DEFAULT_HOURS_REQUIRED};
pub use aggregator::{aggregate, count_warnings};
pub use calculator::progress;
pub use estimator::{project, project_required, CompletionEstimator};
pub use filter::{filter, FilteredLogs};
pub use hours::valid_hours;
pub use validator::{annotate, validate_log};
pub use placement::classify;
pub use report::TraineeReport;
pub use tracker::{ProgressTracker, BasicProgressTracker};
