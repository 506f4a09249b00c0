//! OJT core data models.
//!
//! This crate defines the plain data exchanged between the log source, the
//! accrual engine and the reporting layer. Nothing here computes derived
//! values; see `ojt-progress` for that.

#![warn(missing_docs)]

// Identities
mod id;

// Attendance
mod daily_log;
mod schedule;

// Derived values
mod accrual;

// Placement
mod placement;

// Re-exports
pub use id::*;

pub use daily_log::{DailyLog, DateRange};
pub use schedule::{DaySchedule, WorkSchedule, weekday_name};
pub use accrual::{AccrualSummary, ProgressState, CompletionEstimate};
pub use placement::{HiringStatus, PlacementStatus};
