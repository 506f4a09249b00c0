//! Placement status classification.

use chrono::NaiveDate;
use ojt_core::{HiringStatus, PlacementStatus, ProgressState};

/// Classify where a trainee stands in the placement lifecycle.
///
/// A placement becomes `Ongoing` on its start date once requirements are
/// validated, and `Completed` when the required hours are reached.
pub fn classify(
    hiring: Option<&HiringStatus>,
    progress: &ProgressState,
    today: NaiveDate,
) -> PlacementStatus {
    let Some(hiring) = hiring.filter(|h| h.is_hired) else {
        return PlacementStatus::NotStarted;
    };

    let Some(start) = hiring.ojt_start_date else {
        return PlacementStatus::AcceptedNoStartDate;
    };

    if today < start {
        PlacementStatus::Scheduled
    } else if !hiring.all_requirements_validated {
        PlacementStatus::PendingRequirements
    } else if progress.is_complete() {
        PlacementStatus::Completed
    } else {
        PlacementStatus::Ongoing
    }
}
