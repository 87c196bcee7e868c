//! Resolving a session's weekday and time range into concrete date-times.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{TimetableError, TimetableResult};

/// Parse a three-letter weekday token (`Mon` .. `Sun`).
pub fn parse_weekday(token: &str) -> TimetableResult<Weekday> {
    match token {
        "Mon" => Ok(Weekday::Mon),
        "Tue" => Ok(Weekday::Tue),
        "Wed" => Ok(Weekday::Wed),
        "Thu" => Ok(Weekday::Thu),
        "Fri" => Ok(Weekday::Fri),
        "Sat" => Ok(Weekday::Sat),
        "Sun" => Ok(Weekday::Sun),
        other => Err(TimetableError::UnknownWeekday(other.to_string())),
    }
}

/// A start and end time of day, e.g. `0930to1020` or `0930-1020`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn parse(token: &str) -> TimetableResult<Self> {
        let separator = if token.contains("to") {
            "to"
        } else if token.contains('-') {
            "-"
        } else {
            return Err(TimetableError::malformed_time(
                token,
                "expected 'to' or '-' between start and end",
            ));
        };

        let mut parts = token.split(separator);
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimetableError::malformed_time(
                token,
                format!("expected exactly one '{separator}'"),
            ));
        };

        let start = parse_hhmm(start.trim(), token)?;
        let end = parse_hhmm(end.trim(), token)?;

        if end <= start {
            return Err(TimetableError::malformed_time(
                token,
                "end time must be after start time",
            ));
        }

        Ok(TimeRange { start, end })
    }
}

/// Parse `HHMM` into a time of day, rejecting out-of-range hours and minutes.
fn parse_hhmm(s: &str, token: &str) -> TimetableResult<NaiveTime> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimetableError::malformed_time(
            token,
            format!("'{s}' is not a four-digit HHMM time"),
        ));
    }

    // All four bytes are ASCII digits, so these parses cannot fail
    let hour: u32 = s[..2].parse().unwrap_or(u32::MAX);
    let minute: u32 = s[2..].parse().unwrap_or(u32::MAX);

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        TimetableError::malformed_time(token, format!("'{s}' is not a valid time of day"))
    })
}

/// Resolve a session in the week starting at `week_start` (a Monday).
///
/// Returns the start and end of the session on the same date, or
/// `DayOutOfRange` when that date is past the last representable one.
pub fn resolve_session_time(
    week_start: NaiveDate,
    day: &str,
    time: &str,
) -> TimetableResult<(NaiveDateTime, NaiveDateTime)> {
    let weekday = parse_weekday(day)?;
    let range = TimeRange::parse(time)?;

    let offset = Duration::days(i64::from(weekday.num_days_from_monday()));
    let date = week_start
        .checked_add_signed(offset)
        .ok_or(TimetableError::DayOutOfRange {
            day: weekday,
            week_start,
        })?;

    Ok((date.and_time(range.start), date.and_time(range.end)))
}
