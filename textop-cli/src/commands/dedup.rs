//! Remove-duplicates command implementation

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use textop_core::{join_units, split_units};

use crate::commands::Completion;
use crate::error::CliResult;
use crate::files;

/// Arguments for the remove-duplicates command
#[derive(Debug, Args)]
pub struct RemoveDuplicatesArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Line separator
    #[arg(long = "lsep", value_name = "STRING", default_value = "\n")]
    pub line_separator: String,
}

impl RemoveDuplicatesArgs {
    /// Execute the remove-duplicates command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Splitting lines...");
        let lines = split_units(&content, &self.line_separator);

        log::info!("Removing duplicate lines...");
        let unique = first_occurrences(&lines);

        if unique.len() == lines.len() {
            log::info!("File contained no duplicate lines.");
            return Ok(Completion::Unchanged);
        }
        log::info!(
            "{} of {} lines were duplicates.",
            lines.len() - unique.len(),
            lines.len()
        );

        log::info!("Rejoining lines...");
        let new_content = join_units(&unique, &self.line_separator);

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}

/// Keeps the first occurrence of every line, preserving order.
fn first_occurrences<'t>(lines: &[&'t str]) -> Vec<&'t str> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .copied()
        .filter(|line| seen.insert(*line))
        .collect()
}
