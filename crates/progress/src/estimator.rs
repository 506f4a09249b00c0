//! Completion date estimation.

use chrono::{Days, NaiveDate};
use ojt_core::CompletionEstimate;
use tracing::{debug, warn};

use crate::config::ProjectionConfig;
use crate::error::EngineError;

/// Completion date estimator.
///
/// Projects forward from `today` assuming a fixed number of hours per
/// working day and a flat weekend allowance per full working week. The
/// allowance ignores which weekday `today` is and does not know holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionEstimator {
    config: ProjectionConfig,
}

impl CompletionEstimator {
    /// Create an estimator for a work calendar.
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// The work calendar in use.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Estimate the presumed end date of a placement.
    ///
    /// Without a start date there is nothing to anchor on and the estimate
    /// is absent. Before any hours are logged the default duration is
    /// counted from the start date.
    pub fn estimate(
        &self,
        start_date: Option<NaiveDate>,
        hours_completed: f64,
        remaining_hours: f64,
        today: NaiveDate,
    ) -> CompletionEstimate {
        let Some(start_date) = start_date else {
            return CompletionEstimate::unknown();
        };

        if hours_completed <= 0.0 {
            let days = u64::from(self.config.default_duration_days);
            debug!(%start_date, days, "no hours logged, using default duration");
            return add_days(start_date, days);
        }

        let working_days = self.working_days_needed(remaining_hours);
        let Some(calendar_days) = self.calendar_days(working_days) else {
            warn!(remaining_hours, working_days, "projection span overflows");
            return CompletionEstimate::unknown();
        };
        debug!(
            remaining_hours,
            working_days,
            calendar_days,
            %today,
            "projected completion"
        );
        add_days(today, calendar_days)
    }

    /// Like [`estimate`](Self::estimate), but a missing start date is an error.
    pub fn estimate_required(
        &self,
        start_date: Option<NaiveDate>,
        hours_completed: f64,
        remaining_hours: f64,
        today: NaiveDate,
    ) -> Result<CompletionEstimate, EngineError> {
        if start_date.is_none() {
            return Err(EngineError::MissingInput(
                "OJT start date is required for a projection".to_string(),
            ));
        }
        Ok(self.estimate(start_date, hours_completed, remaining_hours, today))
    }

    /// Working days needed to log `remaining_hours`; negative counts as none.
    ///
    /// Counts too large for a `u64` saturate at `u64::MAX`, which
    /// [`calendar_days`](Self::calendar_days) then rejects.
    pub fn working_days_needed(&self, remaining_hours: f64) -> u64 {
        if !(remaining_hours > 0.0) {
            return 0;
        }
        (remaining_hours / self.config.hours_per_workday).ceil() as u64
    }

    /// Calendar days spanned by `working_days`, with the weekend allowance.
    ///
    /// `None` when the span does not fit in a `u64`.
    pub fn calendar_days(&self, working_days: u64) -> Option<u64> {
        let per_week = u64::from(self.config.working_days_per_week.max(1));
        let weekend_buffer =
            (working_days / per_week).checked_mul(u64::from(self.config.weekend_days_per_week))?;
        working_days.checked_add(weekend_buffer)
    }
}

/// Estimate with the default work calendar.
pub fn project(
    start_date: Option<NaiveDate>,
    hours_completed: f64,
    remaining_hours: f64,
    today: NaiveDate,
) -> CompletionEstimate {
    CompletionEstimator::default().estimate(start_date, hours_completed, remaining_hours, today)
}

/// Estimate with the default work calendar; a missing start date is an error.
pub fn project_required(
    start_date: Option<NaiveDate>,
    hours_completed: f64,
    remaining_hours: f64,
    today: NaiveDate,
) -> Result<CompletionEstimate, EngineError> {
    CompletionEstimator::default().estimate_required(start_date, hours_completed, remaining_hours, today)
}

fn add_days(date: NaiveDate, days: u64) -> CompletionEstimate {
    match date.checked_add_days(Days::new(days)) {
        Some(end) => CompletionEstimate::at(end),
        None => {
            warn!(%date, days, "projected date out of range");
            CompletionEstimate::unknown()
        }
    }
}
