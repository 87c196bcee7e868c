//! Core conversion engine for termcal.
//!
//! Turns a [`TimetableDocument`] (courses, weekly sessions, recess weeks and
//! a semester start date) into an iCalendar file:
//! - `weeks` parses compact week lists like `1-6,8-13`
//! - `recess` maps calendar weeks to teaching weeks around recess weeks
//! - `session_time` resolves a weekday and time range into date-times
//! - `assemble` expands sessions into events and writes the calendar
//! - `validate` performs the structural checks shown to users before generating

pub mod assemble;
pub mod document;
pub mod error;
pub mod event;
pub mod ics;
pub mod recess;
pub mod session_time;
pub mod template;
pub mod validate;
pub mod weeks;

pub use assemble::{build_events, generate_ics};
pub use document::{Course, GlobalSettings, Semester, Session, TimetableDocument};
pub use error::{TimetableError, TimetableResult};
pub use event::{Reminder, TimetableEvent};
pub use validate::{structural_errors, validate};
