//! Materialised timetable events.
//!
//! One event is produced per course, session and week the session runs in.
//! Times are floating local times: no timezone is attached.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dated occurrence of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEvent {
    pub uid: String,
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    pub description: String,
    /// Creation timestamp (DTSTAMP)
    pub created: DateTime<Utc>,
    pub reminder: Option<Reminder>,

    /// Calendar week the occurrence was listed under
    pub week: u32,
    /// Week number shown to students, recess weeks skipped
    pub teaching_week: u32,
}

/// A reminder/alarm for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Minutes before the event to trigger
    pub minutes: u32,
}

impl Reminder {
    /// A reminder `minutes` before the start, or none when `minutes` is 0.
    pub fn before(minutes: u32) -> Option<Self> {
        (minutes > 0).then_some(Reminder { minutes })
    }
}
