//! Daily attendance log model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One day of attendance as reported by the log source.
///
/// Logs are owned by the external logging subsystem; the engine only reads
/// snapshots of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Source-side identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_id: Option<u64>,

    /// Calendar day this log covers
    pub log_date: NaiveDate,

    /// When the trainee clocked in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in: Option<NaiveDateTime>,

    /// When the trainee clocked out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_out: Option<NaiveDateTime>,

    /// Hours credited for the day (`null` in the source reads as 0)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_hours: f64,

    /// Source-side review status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Advisory schedule warning; never invalidates the hours
    #[serde(default)]
    pub validation_warning: Option<String>,
}

impl DailyLog {
    /// Create a log for a day with the given hours.
    pub fn new(log_date: NaiveDate, total_hours: f64) -> Self {
        Self {
            log_id: None,
            log_date,
            time_in: None,
            time_out: None,
            total_hours,
            status: None,
            validation_warning: None,
        }
    }

    /// Attach a validation warning.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.validation_warning = Some(warning.into());
        self
    }

    /// Attach clock-in and clock-out timestamps.
    pub fn with_times(mut self, time_in: NaiveDateTime, time_out: Option<NaiveDateTime>) -> Self {
        self.time_in = Some(time_in);
        self.time_out = time_out;
        self
    }

    /// Whether the log carries a validation warning.
    pub fn has_warning(&self) -> bool {
        self.validation_warning.is_some()
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Inclusive date bounds used to select a view of the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    #[serde(default)]
    pub start: Option<NaiveDate>,

    /// Last day included
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with the given optional bounds.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A range without bounds; every date is inside it.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` falls inside the range. Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_log_deserializes_source_shape() {
        let json = r#"{
            "log_id": 11,
            "log_date": "2024-06-03",
            "time_in": "2024-06-03T08:00:00",
            "time_out": "2024-06-03T17:00:00",
            "total_hours": 8.0,
            "status": "pending",
            "tasks": "filing",
            "validation_warning": null
        }"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.log_id, Some(11));
        assert_eq!(log.log_date, date(2024, 6, 3));
        assert_eq!(log.total_hours, 8.0);
        assert!(log.time_out.is_some());
        assert!(!log.has_warning());
    }

    #[test]
    fn test_log_null_hours_read_as_zero() {
        let json = r#"{"log_date": "2024-06-03", "total_hours": null}"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.total_hours, 0.0);

        let json = r#"{"log_date": "2024-06-03"}"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.total_hours, 0.0);
        assert!(log.validation_warning.is_none());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2024, 6, 1)), Some(date(2024, 6, 30)));
        assert!(range.contains(date(2024, 6, 1)));
        assert!(range.contains(date(2024, 6, 30)));
        assert!(!range.contains(date(2024, 5, 31)));
        assert!(!range.contains(date(2024, 7, 1)));
    }

    #[test]
    fn test_range_open_ends() {
        let from = DateRange::new(Some(date(2024, 6, 1)), None);
        assert!(from.contains(date(2030, 1, 1)));
        assert!(!from.contains(date(2024, 5, 31)));

        let until = DateRange::new(None, Some(date(2024, 6, 1)));
        assert!(until.contains(date(2000, 1, 1)));
        assert!(!until.contains(date(2024, 6, 2)));

        assert!(DateRange::unbounded().is_unbounded());
        assert!(DateRange::unbounded().contains(date(1999, 12, 31)));
    }
}
