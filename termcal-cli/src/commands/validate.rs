use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::structural_errors;

use super::read_document;
use crate::render::render_errors;

pub fn run(input: &Path) -> Result<()> {
    let doc = read_document(input)?;
    let errors = structural_errors(&doc);

    if errors.is_empty() {
        println!("{} {} is valid", "✓".green(), input.display());
        return Ok(());
    }

    println!("{}", render_errors(&errors));
    anyhow::bail!(
        "{} has {} structural {}",
        input.display(),
        errors.len(),
        if errors.len() == 1 { "error" } else { "errors" }
    );
}
