//! Compact week specifications such as `1-13` or `1,3,5-9`.

use std::collections::BTreeSet;

use crate::error::{TimetableError, TimetableResult};

/// Largest week number a specification may name.
///
/// Ranges are expanded eagerly, so both ends are checked against this
/// before anything is collected.
pub const MAX_WEEK: u32 = 1000;

/// Parse a week specification into a sorted, deduplicated list of weeks.
///
/// Tokens are separated by commas and are either a single week or an
/// inclusive `start-end` range. Blank input yields no weeks.
pub fn parse_weeks(spec: &str) -> TimetableResult<Vec<u32>> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut weeks = BTreeSet::new();

    for token in spec.split(',') {
        let token = token.trim();

        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_week(start, token)?;
                let end = parse_week(end, token)?;
                if start > end {
                    return Err(malformed(token));
                }
                weeks.extend(start..=end);
            }
            None => {
                weeks.insert(parse_week(token, token)?);
            }
        }
    }

    Ok(weeks.into_iter().collect())
}

/// A single week number in `1..=MAX_WEEK`. `token` is the whole
/// comma-separated token, reported on failure.
fn parse_week(s: &str, token: &str) -> TimetableResult<u32> {
    let s = s.trim();

    // u32::from_str accepts a leading '+', which a week list never has
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(token));
    }

    match s.parse::<u32>() {
        Ok(week @ 1..=MAX_WEEK) => Ok(week),
        _ => Err(malformed(token)),
    }
}

fn malformed(token: &str) -> TimetableError {
    TimetableError::MalformedWeekSpec {
        token: token.to_string(),
    }
}
