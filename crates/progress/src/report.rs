//! Trainee progress report.

use chrono::NaiveDate;
use ojt_core::{
    AccrualSummary, CompletionEstimate, DailyLog, DateRange, HiringStatus, PlacementStatus,
    ProgressState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{aggregate, count_warnings};
use crate::calculator::progress;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::estimator::CompletionEstimator;
use crate::filter::filter;
use crate::placement::classify;

/// Every derived value the reporting layer reads for one trainee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeReport {
    /// Day the report was computed for
    pub today: NaiveDate,

    /// Placement start date
    pub start_date: Option<NaiveDate>,

    /// Accrual over all logs
    pub summary: AccrualSummary,

    /// Progress against the requirement
    pub progress: ProgressState,

    /// Projected end date
    pub estimate: CompletionEstimate,

    /// Placement status
    pub status: PlacementStatus,

    /// Logs carrying a validation warning
    pub warning_count: usize,

    /// Range the filtered accrual covers
    pub range: DateRange,

    /// Accrual over the logs inside `range`
    pub filtered: AccrualSummary,
}

impl TraineeReport {
    /// Build a report from a log snapshot.
    ///
    /// Fails only when the configuration is invalid.
    pub fn build(
        logs: &[DailyLog],
        hiring: Option<&HiringStatus>,
        range: DateRange,
        today: NaiveDate,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let summary = aggregate(logs);
        let progress = progress(&summary, config.hours_required)?;

        let start_date = hiring.and_then(|h| h.ojt_start_date);
        let estimate = CompletionEstimator::new(config.projection).estimate(
            start_date,
            progress.hours_completed,
            progress.remaining_hours,
            today,
        );

        let status = classify(hiring, &progress, today);
        let filtered = filter(logs, range).summary();
        let warning_count = count_warnings(logs);

        debug!(%status, warning_count, "built trainee report");

        Ok(Self {
            today,
            start_date,
            summary,
            progress,
            estimate,
            status,
            warning_count,
            range,
            filtered,
        })
    }
}
