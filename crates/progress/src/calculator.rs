//! Progress against the required hours.

use ojt_core::{AccrualSummary, ProgressState};
use tracing::debug;

use crate::error::EngineError;

/// Derive remaining hours and percentage complete.
///
/// Remaining hours clamp at zero; the percentage is rounded half-up and
/// may exceed 100 when the trainee logged more than required.
pub fn progress(summary: &AccrualSummary, hours_required: f64) -> Result<ProgressState, EngineError> {
    if !(hours_required.is_finite() && hours_required > 0.0) {
        return Err(EngineError::InvalidConfiguration(format!(
            "hours_required must be positive, got {}",
            hours_required
        )));
    }

    let hours_completed = summary.hours_completed;
    let remaining_hours = (hours_required - hours_completed).max(0.0);
    let ratio = (100.0 * hours_completed / hours_required).max(0.0);
    let progress_percentage = ratio.round() as u32;

    debug!(hours_completed, remaining_hours, progress_percentage, "computed progress");

    Ok(ProgressState {
        hours_required,
        hours_completed,
        remaining_hours,
        progress_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::config::DEFAULT_HOURS_REQUIRED;

    fn summary(hours: f64) -> AccrualSummary {
        AccrualSummary {
            hours_completed: hours,
            total_days: 0,
        }
    }

    #[test]
    fn test_no_logs() {
        let logs: Vec<ojt_core::DailyLog> = Vec::new();
        let state = progress(&aggregate(&logs), DEFAULT_HOURS_REQUIRED).unwrap();
        assert_eq!(state.remaining_hours, 486.0);
        assert_eq!(state.progress_percentage, 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_partial_progress() {
        let state = progress(&summary(243.0), 486.0).unwrap();
        assert_eq!(state.remaining_hours, 243.0);
        assert_eq!(state.progress_percentage, 50);
    }

    #[test]
    fn test_over_completion_is_preserved() {
        let state = progress(&summary(600.0), 486.0).unwrap();
        assert_eq!(state.remaining_hours, 0.0);
        assert_eq!(state.progress_percentage, 123);
        assert!(state.is_complete());
    }

    #[test]
    fn test_rounds_half_up() {
        // 100 * 1 / 8 = 12.5
        assert_eq!(progress(&summary(1.0), 8.0).unwrap().progress_percentage, 13);
        // 100 * 1 / 3 = 33.33
        assert_eq!(progress(&summary(1.0), 3.0).unwrap().progress_percentage, 33);
    }

    #[test]
    fn test_rejects_non_positive_requirement() {
        assert!(matches!(
            progress(&summary(10.0), 0.0),
            Err(EngineError::InvalidConfiguration(_))
        ));
        assert!(progress(&summary(10.0), -5.0).is_err());
        assert!(progress(&summary(10.0), f64::NAN).is_err());
    }

    #[test]
    fn test_progress_is_repeatable() {
        let s = summary(100.0);
        assert_eq!(progress(&s, 486.0).unwrap(), progress(&s, 486.0).unwrap());
    }
}
