//! Derived accrual values.
//!
//! These are recomputed from the logs on every request and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours and days accrued over a set of logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccrualSummary {
    /// Sum of credited hours
    pub hours_completed: f64,

    /// Number of logs counted
    pub total_days: usize,
}

/// Progress against the required hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Hours the placement requires
    pub hours_required: f64,

    /// Hours credited so far
    pub hours_completed: f64,

    /// Hours still to go, never below zero
    pub remaining_hours: f64,

    /// Whole percentage complete; above 100 on over-completion
    pub progress_percentage: u32,
}

impl ProgressState {
    /// Whether the required hours have been reached.
    pub fn is_complete(&self) -> bool {
        self.hours_completed >= self.hours_required
    }
}

/// Projected completion date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    /// Presumed last day of the placement, absent without a start date
    pub presumed_end_date: Option<NaiveDate>,
}

impl CompletionEstimate {
    /// Estimate with a known date.
    pub fn at(date: NaiveDate) -> Self {
        Self {
            presumed_end_date: Some(date),
        }
    }

    /// No estimate can be made.
    pub fn unknown() -> Self {
        Self::default()
    }
}
