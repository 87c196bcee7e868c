use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use termcal_core::{build_events, ics};

use super::read_document;
use crate::render::{Render, render_summary};

pub fn run(input: &Path, output: Option<&Path>, verbose: bool) -> Result<()> {
    let doc = read_document(input)?;

    let events = build_events(&doc, Utc::now()).context("Could not generate calendar")?;
    let content = ics::generate_ics(&events)?;

    match output {
        Some(path) => std::fs::write(path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }

    if verbose {
        for event in &events {
            eprintln!("   {}", event.render());
        }
    }
    eprintln!("{}", render_summary(&events));

    Ok(())
}
