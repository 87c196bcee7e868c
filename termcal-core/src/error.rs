//! Error types for timetable conversion.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Errors that can occur while validating or converting a timetable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Malformed week specification '{token}'")]
    MalformedWeekSpec { token: String },

    #[error("Unknown weekday '{0}', expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun")]
    UnknownWeekday(String),

    #[error("Malformed time range '{token}': {reason}")]
    MalformedTimeRange { token: String, reason: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("semester_start not found in config")]
    MissingSemesterStart,

    #[error("Invalid semester_start '{0}', expected dd/mm/yyyy")]
    InvalidSemesterStart(String),

    #[error("Week {0} falls outside the supported date range")]
    DateOutOfRange(u32),

    #[error("{day} of the week starting {week_start} falls outside the supported date range")]
    DayOutOfRange { day: Weekday, week_start: NaiveDate },

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("Invalid timetable: {}", .0.join("; "))]
    StructuralValidation(Vec<String>),
}

impl TimetableError {
    pub(crate) fn malformed_time(token: &str, reason: impl Into<String>) -> Self {
        TimetableError::MalformedTimeRange {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;
