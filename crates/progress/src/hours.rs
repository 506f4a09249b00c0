//! Countable hours of a single clock-in/clock-out session.

use chrono::{NaiveDateTime, NaiveTime};

use crate::config::WorkingWindows;

/// Hours of a session that fall inside the working windows.
///
/// Time before the morning window opens and after the afternoon window
/// closes is dropped, as is the midday gap between the windows. Only the
/// time of day is used. The result is rounded to two decimals; a missing
/// timestamp yields zero.
pub fn valid_hours(
    time_in: Option<NaiveDateTime>,
    time_out: Option<NaiveDateTime>,
    windows: &WorkingWindows,
) -> f64 {
    let (Some(time_in), Some(time_out)) = (time_in, time_out) else {
        return 0.0;
    };

    let start = time_in.time().max(windows.morning_start);
    let end = time_out.time().min(windows.afternoon_end);

    let mut seconds = 0i64;

    if start < windows.morning_end {
        let morning_end = end.min(windows.morning_end);
        seconds += span(start, morning_end);
    }

    if end > windows.afternoon_start {
        let afternoon_start = start.max(windows.afternoon_start);
        seconds += span(afternoon_start, end);
    }

    round2(seconds as f64 / 3600.0)
}

fn span(from: NaiveTime, to: NaiveTime) -> i64 {
    if to > from {
        (to - from).num_seconds()
    } else {
        0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
