//! Mapping between calendar weeks and teaching weeks around recess weeks.
//!
//! A *calendar week* counts every week since the semester start, recess
//! weeks included. A *teaching week* is the number students see, with
//! recess weeks left out of the count.

use crate::error::TimetableResult;
use crate::weeks::parse_weeks;

/// The set of recess weeks for a semester, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecessWeeks {
    weeks: Vec<u32>,
}

impl RecessWeeks {
    pub fn new(mut weeks: Vec<u32>) -> Self {
        weeks.sort_unstable();
        weeks.dedup();
        RecessWeeks { weeks }
    }

    /// Parse recess weeks from a week specification such as `"7"` or `"7,14"`.
    pub fn parse(spec: &str) -> TimetableResult<Self> {
        Ok(RecessWeeks {
            weeks: parse_weeks(spec)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.weeks
    }

    /// Teaching week shown to students for a calendar week.
    ///
    /// Only recess weeks strictly before `calendar_week` are subtracted.
    pub fn teaching_week(&self, calendar_week: u32) -> u32 {
        let before = self.weeks.partition_point(|&r| r < calendar_week) as u32;
        calendar_week - before
    }

    /// Calendar week whose Monday anchors an occurrence listed as `week`.
    ///
    /// Every recess week at or before `week` pushes the occurrence one
    /// week later.
    pub fn placement_week(&self, week: u32) -> u32 {
        let passed = self.weeks.partition_point(|&r| r <= week) as u32;
        week.saturating_add(passed)
    }
}
