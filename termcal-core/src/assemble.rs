//! Expanding a timetable document into dated events and an ICS file.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::document::{Course, Semester, SessionFields, TimetableDocument};
use crate::error::{TimetableError, TimetableResult};
use crate::event::{Reminder, TimetableEvent};
use crate::ics;
use crate::session_time::resolve_session_time;
use crate::template;
use crate::weeks::parse_weeks;

/// Convert a timetable document into .ics content.
///
/// Any malformed session aborts the whole conversion.
pub fn generate_ics(doc: &TimetableDocument) -> TimetableResult<String> {
    let events = build_events(doc, Utc::now())?;
    let ics = ics::generate_ics(&events)?;

    info!(events = events.len(), courses = doc.courses.len(), "Generated timetable");
    Ok(ics)
}

/// Expand every complete session of every course into one event per week.
///
/// `created` becomes each event's DTSTAMP. Sessions missing a required
/// field are skipped.
pub fn build_events(
    doc: &TimetableDocument,
    created: DateTime<Utc>,
) -> TimetableResult<Vec<TimetableEvent>> {
    let semester = Semester::from_settings(&doc.global)?;

    if semester.start.weekday() != Weekday::Mon {
        warn!(
            semester_start = %semester.start,
            weekday = %semester.start.weekday(),
            "Semester start is not a Monday, sessions are placed relative to it anyway"
        );
    }

    let mut events = Vec::new();

    for course in &doc.courses {
        for (index, session) in course.sessions.iter().enumerate() {
            let Some(fields) = session.required_fields() else {
                debug!(
                    course = course.code.as_deref().unwrap_or_default(),
                    session = index + 1,
                    "Skipping incomplete session"
                );
                continue;
            };

            let occurrence = SessionContext {
                semester: &semester,
                course,
                fields,
                description: session
                    .description
                    .as_deref()
                    .unwrap_or(&semester.description_template),
                reminder: Reminder::before(
                    session.notification.unwrap_or(semester.notification_minutes),
                ),
                created,
            };

            let weeks = parse_weeks(fields.weeks)?;
            debug!(
                course = course.code.as_deref().unwrap_or_default(),
                kind = fields.kind,
                occurrences = weeks.len(),
                "Expanding session"
            );

            for week in weeks {
                events.push(occurrence.event_for_week(week)?);
            }
        }
    }

    Ok(events)
}

/// Everything needed to materialise one session's occurrences.
struct SessionContext<'a> {
    semester: &'a Semester,
    course: &'a Course,
    fields: SessionFields<'a>,
    description: &'a str,
    reminder: Option<Reminder>,
    created: DateTime<Utc>,
}

impl SessionContext<'_> {
    fn event_for_week(&self, week: u32) -> TimetableResult<TimetableEvent> {
        let recess = &self.semester.recess;

        let week_start = week_start(self.semester.start, recess.placement_week(week))
            .ok_or(TimetableError::DateOutOfRange(week))?;
        let (start, end) = resolve_session_time(week_start, self.fields.day, self.fields.time)?;

        let summary = template::render(
            &self.semester.name_template,
            &[
                ("code", self.course.code.as_deref().unwrap_or_default()),
                ("name", self.course.name.as_deref().unwrap_or_default()),
                ("type", self.fields.kind),
            ],
        )?;

        let teaching_week = recess.teaching_week(week);
        let week_label = teaching_week.to_string();
        let description = template::render(self.description, &[("week", week_label.as_str())])?;

        Ok(TimetableEvent {
            uid: format!("{}@termcal", Uuid::new_v4()),
            summary,
            start,
            end,
            location: self.fields.location.to_string(),
            description,
            created: self.created,
            reminder: self.reminder,
            week,
            teaching_week,
        })
    }
}

/// Monday of the given 1-indexed calendar week.
fn week_start(semester_start: NaiveDate, calendar_week: u32) -> Option<NaiveDate> {
    let offset = Duration::try_weeks(i64::from(calendar_week) - 1)?;
    semester_start.checked_add_signed(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GlobalSettings, Session};
    use crate::recess::RecessWeeks;
    use chrono::{NaiveDateTime, TimeZone};

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 25, 8, 0, 0).unwrap()
    }

    fn session(day: &str, time: &str, weeks: &str) -> Session {
        Session {
            kind: Some("Lecture".into()),
            day: Some(day.into()),
            time: Some(time.into()),
            location: Some("LT27".into()),
            weeks: Some(weeks.into()),
            ..Default::default()
        }
    }

    fn document(recess: Option<&str>, sessions: Vec<Session>) -> TimetableDocument {
        TimetableDocument {
            global: GlobalSettings {
                semester_start: Some("01/09/2025".into()),
                recess_weeks: recess.map(str::to_string),
                description: Some("Week {week}".into()),
                ..Default::default()
            },
            courses: vec![Course {
                code: Some("CS1101S".into()),
                name: Some("Programming Methodology".into()),
                sessions,
            }],
        }
    }

    #[test]
    fn test_two_weeks_no_recess() {
        let doc = document(None, vec![session("Mon", "0930to1020", "1-2")]);
        let events = build_events(&doc, created()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start, at(d(), 9, 30));
        assert_eq!(events[0].end, at(d(), 10, 20));

        let next = d() + Duration::days(7);
        assert_eq!(events[1].start, at(next, 9, 30));
        assert_eq!(events[1].end, at(next, 10, 20));
    }

    #[test]
    fn test_recess_shifts_placement_and_renumbers() {
        let doc = document(Some("2"), vec![session("Mon", "0930to1020", "1,3")]);
        let events = build_events(&doc, created()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start.date(), d());
        assert_eq!(events[0].description, "Week 1");

        assert_eq!(events[1].start.date(), d() + Duration::days(21));
        assert_eq!(events[1].week, 3);
        assert_eq!(events[1].teaching_week, 2);
        assert_eq!(events[1].description, "Week 2");
    }

    #[test]
    fn test_event_fields_from_templates() {
        let mut doc = document(None, vec![session("Wed", "1400-1500", "1")]);
        doc.global.notification = Some(30);
        let events = build_events(&doc, created()).unwrap();

        let event = &events[0];
        assert_eq!(event.summary, "CS1101S Programming Methodology - Lecture");
        assert_eq!(event.location, "LT27");
        assert_eq!(event.start, at(d() + Duration::days(2), 14, 0));
        assert_eq!(event.created, created());
        assert_eq!(event.reminder, Some(Reminder { minutes: 30 }));
        assert!(event.uid.ends_with("@termcal"));
    }

    #[test]
    fn test_custom_name_template() {
        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.name = Some("[{type}] {code}".into());
        let events = build_events(&doc, created()).unwrap();
        assert_eq!(events[0].summary, "[Lecture] CS1101S");
    }

    #[test]
    fn test_session_overrides_description_and_notification() {
        let mut s = session("Fri", "1600to1800", "2");
        s.description = Some("Lab {week}, bring laptop".into());
        s.notification = Some(0);

        let doc = document(None, vec![s]);
        let events = build_events(&doc, created()).unwrap();

        assert_eq!(events[0].description, "Lab 2, bring laptop");
        assert_eq!(events[0].reminder, None);
    }

    #[test]
    fn test_default_notification_and_description() {
        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.description = None;
        let events = build_events(&doc, created()).unwrap();

        assert_eq!(events[0].description, "");
        assert_eq!(events[0].reminder, Some(Reminder { minutes: 15 }));
    }

    #[test]
    fn test_global_notification_zero_disables() {
        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.notification = Some(0);
        let events = build_events(&doc, created()).unwrap();
        assert_eq!(events[0].reminder, None);
    }

    #[test]
    fn test_incomplete_session_is_skipped() {
        let mut incomplete = session("Tue", "1000to1100", "1-13");
        incomplete.location = None;

        let doc = document(None, vec![incomplete, session("Mon", "0930to1020", "1")]);
        let events = build_events(&doc, created()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start.date(), d());
    }

    #[test]
    fn test_any_bad_session_aborts_generation() {
        let doc = document(
            None,
            vec![
                session("Mon", "0930to1020", "1-13"),
                session("Mon", "2500to2600", "1"),
            ],
        );
        assert!(matches!(
            build_events(&doc, created()),
            Err(TimetableError::MalformedTimeRange { .. })
        ));

        let doc = document(None, vec![session("Funday", "0930to1020", "1")]);
        assert_eq!(
            build_events(&doc, created()).unwrap_err(),
            TimetableError::UnknownWeekday("Funday".into())
        );

        let doc = document(None, vec![session("Mon", "0930to1020", "1-x")]);
        assert!(matches!(
            build_events(&doc, created()),
            Err(TimetableError::MalformedWeekSpec { .. })
        ));
    }

    #[test]
    fn test_template_errors_abort_generation() {
        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.description = Some("Week {week} of {code}".into());
        assert!(matches!(
            build_events(&doc, created()),
            Err(TimetableError::Template(_))
        ));

        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.name = Some("{title}".into());
        assert!(matches!(
            build_events(&doc, created()),
            Err(TimetableError::Template(_))
        ));
    }

    #[test]
    fn test_missing_semester_start() {
        let mut doc = document(None, vec![session("Mon", "0930to1020", "1")]);
        doc.global.semester_start = None;
        assert_eq!(
            build_events(&doc, created()).unwrap_err(),
            TimetableError::MissingSemesterStart
        );
    }

    #[test]
    fn test_huge_week_is_rejected_before_expansion() {
        for weeks in ["4000000000", "1-4294967295"] {
            let doc = document(None, vec![session("Mon", "0930to1020", weeks)]);
            assert_eq!(
                build_events(&doc, created()).unwrap_err(),
                TimetableError::MalformedWeekSpec {
                    token: weeks.to_string()
                }
            );
        }
    }

    fn context_at_end_of_time<'a>(
        semester: &'a Semester,
        course: &'a Course,
        day: &'a str,
    ) -> SessionContext<'a> {
        SessionContext {
            semester,
            course,
            fields: SessionFields {
                kind: "Lecture",
                day,
                time: "0930to1020",
                location: "LT27",
                weeks: "1",
            },
            description: "",
            reminder: None,
            created: created(),
        }
    }

    #[test]
    fn test_dates_past_the_last_representable_day_are_errors() {
        let semester = Semester {
            start: NaiveDate::MAX,
            recess: RecessWeeks::default(),
            name_template: "{code}".into(),
            description_template: String::new(),
            notification_minutes: 0,
        };
        let course = document(None, Vec::new()).courses.remove(0);

        let event = context_at_end_of_time(&semester, &course, "Mon")
            .event_for_week(1)
            .unwrap();
        assert_eq!(event.start.date(), NaiveDate::MAX);

        assert_eq!(
            context_at_end_of_time(&semester, &course, "Mon")
                .event_for_week(2)
                .unwrap_err(),
            TimetableError::DateOutOfRange(2)
        );
        assert_eq!(
            context_at_end_of_time(&semester, &course, "Tue")
                .event_for_week(1)
                .unwrap_err(),
            TimetableError::DayOutOfRange {
                day: Weekday::Tue,
                week_start: NaiveDate::MAX,
            }
        );
    }

    #[test]
    fn test_generate_ics_end_to_end() {
        let doc = document(Some("7"), vec![session("Thu", "1200to1400", "6-8")]);
        let ics = generate_ics(&doc).unwrap();

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert!(ics.contains("DTSTART:20251009T120000"));
        // Week 7 is recess: the week 7 session lands in calendar week 8
        assert!(ics.contains("DTSTART:20251023T120000"));
        // and week 8 in calendar week 9, still numbered as teaching week 7
        assert!(ics.contains("DTSTART:20251030T120000"));
        assert_eq!(ics.matches("DESCRIPTION:Week 6").count(), 1);
        assert_eq!(ics.matches("DESCRIPTION:Week 7").count(), 2);
        assert_eq!(ics.matches("BEGIN:VALARM").count(), 3);
    }

    #[test]
    fn test_generate_ics_failure_emits_nothing() {
        let doc = document(None, vec![session("Mon", "1020to0930", "1")]);
        assert!(generate_ics(&doc).is_err());
    }
}
