//! TUI rendering traits for termcal types.
//!
//! Extension traits that add colored terminal rendering to termcal-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use termcal_core::TimetableEvent;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TimetableEvent {
    fn render(&self) -> String {
        let when = format!(
            "{} {}-{}",
            self.start.format("%a %d/%m/%Y"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
        );
        let week = format!("week {}", self.teaching_week);

        format!(
            "{} {} {} {}",
            "+".green(),
            self.summary,
            when.dimmed(),
            week.dimmed()
        )
    }
}

/// One-line summary of a generation run
pub fn render_summary(events: &[TimetableEvent]) -> String {
    format!(
        "{} Generated {} {}",
        "✓".green(),
        events.len(),
        pluralize("event", events.len())
    )
}

/// Render validation errors as an indented list
pub fn render_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("   {} {}", "✗".red(), e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
