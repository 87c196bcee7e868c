//! ICS file generation.
//!
//! This module writes timetable events out as an RFC 5545 calendar.

mod generate;

pub use generate::{PRODID, generate_ics};
