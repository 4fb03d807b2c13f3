//! Display formatting for header values

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Formats a `DDMMYYYY` date field
///
/// Returns `None` when `raw` is not exactly eight digits forming a valid
/// calendar date.
pub fn format_header_date(raw: &str) -> Option<String> {
    let date = parse_ddmmyyyy(raw)?;
    date.and_hms_opt(0, 0, 0).map(format_date_time)
}

/// Parses `DDMMYYYY`
pub fn parse_ddmmyyyy(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day = raw[0..2].parse::<u32>().ok()?;
    let month = raw[2..4].parse::<u32>().ok()?;
    let year = raw[4..8].parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a timestamp, leaving out the time of day when it is midnight
pub fn format_date_time(value: NaiveDateTime) -> String {
    if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
