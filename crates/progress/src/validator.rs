//! Schedule warnings for daily logs.
//!
//! Warnings flag logs that sit outside the employer's schedule so a
//! supervisor can review them. They never change the hours credited.

use chrono::Datelike;
use ojt_core::{weekday_name, DailyLog, WorkSchedule};

/// Compute the schedule warning for one log, if any.
///
/// Only a log whose clocked span lies entirely outside the working day is
/// flagged; partial overlap is fine. An empty schedule means the employer
/// has not set one, and nothing is flagged.
///
/// Schedule times are echoed as `HH:MM` whatever precision they were
/// stored with, so `08:00:00` reads "starts at 08:00".
pub fn validate_log(log: &DailyLog, schedule: &WorkSchedule) -> Option<String> {
    if schedule.working_days() == 0 {
        return None;
    }
    let time_in = log.time_in?;
    let day = time_in.weekday();

    let Some(hours) = schedule.day(day) else {
        return Some(format!("{} is not a working day", weekday_name(day)));
    };

    let (Some(start), Some(end), Some(time_out)) = (hours.start, hours.end, log.time_out) else {
        return None;
    };

    let clock_in = time_in.time();
    let clock_out = time_out.time();

    if clock_out < start {
        Some(format!("Time-out before work hours (starts at {})", start.format("%H:%M")))
    } else if clock_in > end {
        Some(format!("Time-in after work hours (ends at {})", end.format("%H:%M")))
    } else if clock_in == clock_out {
        Some("Time-in and time-out are the same".to_string())
    } else {
        None
    }
}

/// Copy the logs, filling in schedule warnings the source did not supply.
///
/// Warnings already present are kept as they are.
pub fn annotate(logs: &[DailyLog], schedule: &WorkSchedule) -> Vec<DailyLog> {
    logs.iter()
        .map(|log| {
            let mut log = log.clone();
            if log.validation_warning.is_none() {
                log.validation_warning = validate_log(&log, schedule);
            }
            log
        })
        .collect()
}
