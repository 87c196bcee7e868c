//! Structural validation of a timetable document.
//!
//! Only checks that required fields are present. Whether dates, times and
//! week lists actually parse is left to generation.

use crate::document::{TimetableDocument, present};
use crate::error::{TimetableError, TimetableResult};

/// Check the document's structure, collecting every problem found.
pub fn validate(doc: &TimetableDocument) -> TimetableResult<()> {
    let errors = structural_errors(doc);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TimetableError::StructuralValidation(errors))
    }
}

/// One human-readable message per violated constraint, in document order.
pub fn structural_errors(doc: &TimetableDocument) -> Vec<String> {
    let mut errors = Vec::new();

    if present(&doc.global.semester_start).is_none() {
        errors.push("Semester start date is required".to_string());
    }

    if doc.courses.is_empty() {
        errors.push("At least one course is required".to_string());
    }

    for (i, course) in doc.courses.iter().enumerate() {
        let course_no = i + 1;

        if present(&course.code).is_none() {
            errors.push(format!("Course {course_no} must have a code"));
        }
        if present(&course.name).is_none() {
            errors.push(format!("Course {course_no} must have a name"));
        }

        let course_label = present(&course.code)
            .map(str::to_string)
            .unwrap_or_else(|| course_no.to_string());

        for (j, session) in course.sessions.iter().enumerate() {
            let prefix = format!("Session {} in course {}", j + 1, course_label);

            let required = [
                (&session.kind, "a type"),
                (&session.day, "a day"),
                (&session.time, "a time"),
                (&session.location, "a location"),
                (&session.weeks, "weeks"),
            ];

            for (field, what) in required {
                if present(field).is_none() {
                    errors.push(format!("{prefix} must have {what}"));
                }
            }
        }
    }

    errors
}
