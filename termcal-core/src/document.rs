//! The timetable document submitted by clients.
//!
//! Every field is optional at the schema level so that structurally
//! incomplete documents still deserialize and can be reported on by
//! [`validate`](crate::validate::validate). Wrong JSON *types* (a number
//! where a string belongs, say) are rejected by serde.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};
use crate::recess::RecessWeeks;

/// Event name used when the document does not provide one.
pub const DEFAULT_NAME_TEMPLATE: &str = "{code} {name} - {type}";

/// Reminder lead time in minutes used when neither the session nor the
/// global settings specify one.
pub const DEFAULT_NOTIFICATION_MINUTES: u32 = 15;

/// Date format of `semester_start`.
pub const SEMESTER_START_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableDocument {
    #[serde(default)]
    pub global: GlobalSettings,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl TimetableDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Monday of week 1, as `dd/mm/yyyy`
    pub semester_start: Option<String>,
    /// Week specification of recess weeks, e.g. `"7"` or `"7,14"`
    pub recess_weeks: Option<String>,
    /// Event name template (`{code}`, `{name}`, `{type}`)
    pub name: Option<String>,
    /// Event description template (`{week}`)
    pub description: Option<String>,
    /// Reminder lead time in minutes, 0 disables reminders
    pub notification: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub weeks: Option<String>,
    pub description: Option<String>,
    pub notification: Option<u32>,
}

/// The fields every session needs before any event can be generated.
#[derive(Debug, Clone, Copy)]
pub struct SessionFields<'a> {
    pub kind: &'a str,
    pub day: &'a str,
    pub time: &'a str,
    pub location: &'a str,
    pub weeks: &'a str,
}

impl Session {
    /// The required fields, or `None` if any of them is missing or blank.
    pub fn required_fields(&self) -> Option<SessionFields<'_>> {
        Some(SessionFields {
            kind: present(&self.kind)?,
            day: present(&self.day)?,
            time: present(&self.time)?,
            location: present(&self.location)?,
            weeks: present(&self.weeks)?,
        })
    }
}

/// A non-blank string field.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Global settings with defaults applied and every field parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    pub start: NaiveDate,
    pub recess: RecessWeeks,
    pub name_template: String,
    pub description_template: String,
    pub notification_minutes: u32,
}

impl Semester {
    pub fn from_settings(settings: &GlobalSettings) -> TimetableResult<Self> {
        let start_str =
            present(&settings.semester_start).ok_or(TimetableError::MissingSemesterStart)?;
        let start = parse_semester_start(start_str)?;

        let recess = match &settings.recess_weeks {
            Some(spec) => RecessWeeks::parse(spec)?,
            None => RecessWeeks::default(),
        };

        let name_template = present(&settings.name)
            .unwrap_or(DEFAULT_NAME_TEMPLATE)
            .to_string();

        Ok(Semester {
            start,
            recess,
            name_template,
            description_template: settings.description.clone().unwrap_or_default(),
            notification_minutes: settings
                .notification
                .unwrap_or(DEFAULT_NOTIFICATION_MINUTES),
        })
    }
}

/// Parse a `dd/mm/yyyy` semester start date.
pub fn parse_semester_start(s: &str) -> TimetableResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SEMESTER_START_FORMAT)
        .map_err(|_| TimetableError::InvalidSemesterStart(s.to_string()))
}
