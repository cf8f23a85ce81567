//! Whole-text replacement

use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;
use crate::split::split_units;

/// Replaces `pattern` in `content`.
///
/// With `literal` the pattern is an exact substring; otherwise it is
/// compiled as a regex and every match is substituted. Returns the input
/// borrowed when nothing changes.
pub fn replace_text<'t>(
    content: &'t str,
    pattern: &str,
    replacement: &str,
    literal: bool,
) -> Result<Cow<'t, str>> {
    if literal {
        if pattern == replacement || !content.contains(pattern) {
            log::debug!("Nothing to replace.");
            return Ok(Cow::Borrowed(content));
        }
        return Ok(Cow::Owned(content.replace(pattern, replacement)));
    }

    let regex = Regex::new(pattern)?;
    Ok(regex.replace_all(content, replacement))
}

/// Replaces a regex pattern line by line.
///
/// Returns the rebuilt text and the number of lines that changed;
/// untouched lines are carried over verbatim.
pub fn replace_lines(
    content: &str,
    line_separator: &str,
    pattern: &str,
    replacement: &str,
) -> Result<(String, usize)> {
    let regex = Regex::new(pattern)?;

    let lines = split_units(content, line_separator);
    let mut changed = 0usize;
    let replaced: Vec<Cow<str>> = lines
        .iter()
        .map(|line| {
            let new_line = regex.replace_all(line, replacement);
            if new_line != *line {
                changed += 1;
            }
            new_line
        })
        .collect();

    Ok((replaced.join(line_separator), changed))
}
