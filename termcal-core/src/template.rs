//! Placeholder substitution for event names and descriptions.
//!
//! Templates use `{key}` placeholders, with `{{` and `}}` for literal braces:
//!
//! ```
//! use termcal_core::template::render;
//!
//! let out = render("{code} - Week {week} {{notes}}", &[("code", "CS1010"), ("week", "3")]);
//! assert_eq!(out.unwrap(), "CS1010 - Week 3 {notes}");
//! ```

use crate::error::{TimetableError, TimetableResult};

/// Render `template`, substituting each `{key}` with its value from `values`.
///
/// Unknown keys, empty `{}` fields, format specs and unbalanced braces are
/// errors.
pub fn render(template: &str, values: &[(&str, &str)]) -> TimetableResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => {
                            return Err(TimetableError::Template(format!(
                                "unclosed '{{' in template '{template}'"
                            )));
                        }
                        Some(ch) => field.push(ch),
                    }
                }
                out.push_str(lookup(&field, values)?);
            }
            '}' => {
                return Err(TimetableError::Template(format!(
                    "single '}}' encountered in template '{template}'"
                )));
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn lookup<'a>(field: &str, values: &[(&str, &'a str)]) -> TimetableResult<&'a str> {
    if field.is_empty() {
        return Err(TimetableError::Template(
            "positional '{}' fields are not supported, use a named placeholder".into(),
        ));
    }

    if field.contains([':', '!']) {
        return Err(TimetableError::Template(format!(
            "format options are not supported in '{{{field}}}'"
        )));
    }

    values
        .iter()
        .find(|(key, _)| *key == field)
        .map(|(_, value)| *value)
        .ok_or_else(|| TimetableError::Template(format!("unknown placeholder '{{{field}}}'")))
}
