//! Accrual of logged hours.

use ojt_core::{AccrualSummary, DailyLog};
use tracing::{debug, warn};

/// Sum the hours and count the days of a log sequence.
///
/// Warned logs count in full: a validation warning is advisory only.
/// Duplicate dates are not merged. Negative or non-finite hours are
/// normalized to zero.
pub fn aggregate<'a, I>(logs: I) -> AccrualSummary
where
    I: IntoIterator<Item = &'a DailyLog>,
{
    let mut summary = AccrualSummary::default();

    for log in logs {
        summary.total_days += 1;
        if log.total_hours.is_finite() && log.total_hours >= 0.0 {
            summary.hours_completed += log.total_hours;
        } else {
            warn!(date = %log.log_date, hours = log.total_hours, "ignoring invalid log hours");
        }
    }

    debug!(
        hours_completed = summary.hours_completed,
        total_days = summary.total_days,
        "aggregated logs"
    );
    summary
}

/// Number of logs carrying a validation warning.
pub fn count_warnings<'a, I>(logs: I) -> usize
where
    I: IntoIterator<Item = &'a DailyLog>,
{
    logs.into_iter().filter(|log| log.has_warning()).count()
}
