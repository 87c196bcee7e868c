//! ICS file generation.

use crate::error::{TimetableError, TimetableResult};
use crate::event::TimetableEvent;
use chrono::NaiveDateTime;
use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

/// Product identifier written into every generated calendar
pub const PRODID: &str = "-//termcal//timetable//EN";

/// Generate .ics content holding every event in one VCALENDAR
pub fn generate_ics(events: &[TimetableEvent]) -> TimetableResult<String> {
    let mut cal = Calendar::new();

    for event in events {
        if event.end <= event.start {
            return Err(TimetableError::IcsGenerate(format!(
                "event '{}' ends before it starts",
                event.summary
            )));
        }

        cal.push(to_ics_event(event));
    }

    let cal = cal.done();

    Ok(normalize_output(&cal.to_string()))
}

fn to_ics_event(event: &TimetableEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);

    // DTSTAMP - required by RFC 5545, the time the event was generated
    let dtstamp = event.created.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // Floating local times (no Z, no TZID)
    ics_event.add_property("DTSTART", floating(&event.start));
    ics_event.add_property("DTEND", floating(&event.end));

    ics_event.location(&event.location);
    ics_event.description(&event.description);

    if let Some(reminder) = event.reminder {
        let lead = chrono::Duration::minutes(i64::from(reminder.minutes));
        ics_event.alarm(Alarm::display("Reminder", Trigger::before_start(lead)));
    }

    ics_event.done()
}

fn floating(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Rewrite the icalendar crate's output line by line.
///
/// The crate's own PRODID is swapped for [`PRODID`], the default
/// `CALSCALE:GREGORIAN` is omitted, and alarms keep only the properties
/// VALARM defines (the crate also gives them a DTSTAMP and a UID).
fn normalize_output(ics: &str) -> String {
    let mut out = String::with_capacity(ics.len());
    let mut in_alarm = false;

    for line in ics.lines() {
        let keep = match line {
            "CALSCALE:GREGORIAN" => false,
            "BEGIN:VALARM" => {
                in_alarm = true;
                true
            }
            "END:VALARM" => {
                in_alarm = false;
                true
            }
            _ if line.starts_with("PRODID:") => {
                out.push_str(&format!("PRODID:{PRODID}\r\n"));
                false
            }
            _ => !(in_alarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:"))),
        };

        if keep {
            out.push_str(line);
            out.push_str("\r\n");
        }
    }

    out
}
