//! Hiring and placement status models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hiring status of a trainee as reported by the placement system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringStatus {
    /// Trainee has an accepted application
    pub is_hired: bool,

    /// Placement has begun
    pub has_ojt_started: bool,

    /// First day of the placement, once the employer sets it
    pub ojt_start_date: Option<NaiveDate>,

    /// All pre-placement requirements were validated
    pub all_requirements_validated: bool,

    /// Assigned supervisor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
}

/// Where a trainee stands in the placement lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementStatus {
    /// No accepted application
    NotStarted,
    /// Accepted, but the employer has not set a start date
    AcceptedNoStartDate,
    /// Start date lies in the future
    Scheduled,
    /// Started, but requirements are still being validated
    PendingRequirements,
    /// Accruing hours
    Ongoing,
    /// Required hours reached
    Completed,
}

impl PlacementStatus {
    /// Label shown by the portals.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::NotStarted => "Not Started",
            PlacementStatus::AcceptedNoStartDate => "Accepted - No Start Date Set",
            PlacementStatus::Scheduled => "Scheduled",
            PlacementStatus::PendingRequirements => "Pending Requirements",
            PlacementStatus::Ongoing => "Ongoing",
            PlacementStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
