//! Employer work schedule model.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Working hours for one weekday.
///
/// Times are exchanged as `HH:MM` strings. A missing or unreadable time
/// leaves the bound unset, which disables the checks that need it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Start of the working day
    #[serde(default, with = "hhmm")]
    pub start: Option<NaiveTime>,

    /// End of the working day
    #[serde(default, with = "hhmm")]
    pub end: Option<NaiveTime>,
}

impl DaySchedule {
    /// A day running from `start` to `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// Weekly schedule keyed by full weekday name (`"Monday"`, ...).
///
/// Days absent from the map are non-working days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkSchedule(BTreeMap<String, DaySchedule>);

impl WorkSchedule {
    /// Empty schedule (no working days).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hours for a weekday.
    pub fn with_day(mut self, day: Weekday, hours: DaySchedule) -> Self {
        self.0.insert(weekday_name(day).to_string(), hours);
        self
    }

    /// Hours for a weekday, if it is a working day.
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.0.get(weekday_name(day))
    }

    /// Number of working days in the week.
    pub fn working_days(&self) -> usize {
        self.0.len()
    }
}

/// Full English name of a weekday, as used for schedule keys and messages.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

mod hhmm {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            let s = s.trim();
            NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .ok()
        }))
    }
}
