pub mod generate;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use termcal_core::TimetableDocument;

/// Read a timetable document from a file, or from stdin when `path` is `-`.
pub fn read_document(path: &Path) -> Result<TimetableDocument> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read timetable from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    TimetableDocument::from_json(&content)
        .with_context(|| format!("{} is not a valid timetable document", path.display()))
}
