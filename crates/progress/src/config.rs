//! Engine configuration.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Hours a standard placement requires.
pub const DEFAULT_HOURS_REQUIRED: f64 = 486.0;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hours a placement requires
    pub hours_required: f64,

    /// Work calendar used for projections
    pub projection: ProjectionConfig,

    /// Windows in which clocked time counts
    pub windows: WorkingWindows,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hours_required: DEFAULT_HOURS_REQUIRED,
            projection: ProjectionConfig::default(),
            windows: WorkingWindows::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constant is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.hours_required.is_finite() && self.hours_required > 0.0) {
            return Err(EngineError::InvalidConfiguration(format!(
                "hours_required must be positive, got {}",
                self.hours_required
            )));
        }
        self.projection.validate()?;
        self.windows.validate()
    }
}

/// Work calendar assumed when projecting forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Hours credited per working day
    pub hours_per_workday: f64,

    /// Days from the start date used before any hours are logged
    pub default_duration_days: u32,

    /// Working days per week
    pub working_days_per_week: u32,

    /// Non-working days added per full working week
    pub weekend_days_per_week: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            hours_per_workday: 8.0,
            default_duration_days: 90,
            working_days_per_week: 5,
            weekend_days_per_week: 2,
        }
    }
}

impl ProjectionConfig {
    /// Check the calendar is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.hours_per_workday.is_finite() && self.hours_per_workday > 0.0) {
            return Err(EngineError::InvalidConfiguration(format!(
                "hours_per_workday must be positive, got {}",
                self.hours_per_workday
            )));
        }
        if self.working_days_per_week == 0 {
            return Err(EngineError::InvalidConfiguration(
                "working_days_per_week must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Morning and afternoon windows in which clocked time is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingWindows {
    /// Morning window opens
    pub morning_start: NaiveTime,
    /// Morning window closes
    pub morning_end: NaiveTime,
    /// Afternoon window opens
    pub afternoon_start: NaiveTime,
    /// Afternoon window closes
    pub afternoon_end: NaiveTime,
}

impl Default for WorkingWindows {
    fn default() -> Self {
        Self {
            morning_start: hm(7, 0),
            morning_end: hm(12, 0),
            afternoon_start: hm(13, 0),
            afternoon_end: hm(17, 0),
        }
    }
}

impl WorkingWindows {
    /// Check the windows are ordered.
    pub fn validate(&self) -> Result<(), EngineError> {
        let ordered = self.morning_start <= self.morning_end
            && self.morning_end <= self.afternoon_start
            && self.afternoon_start <= self.afternoon_end;
        if !ordered {
            return Err(EngineError::InvalidConfiguration(
                "working windows must be ordered morning then afternoon".to_string(),
            ));
        }
        Ok(())
    }
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}
