//! Remove-units command implementation

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use textop_core::{join_units, split_units};

use crate::commands::{Completion, SeparatorArgs};
use crate::error::CliResult;
use crate::files;

/// Arguments for the remove-units command
#[derive(Debug, Args)]
pub struct RemoveUnitsArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Remove these units
    #[arg(value_name = "UNIT", required = true, num_args = 1..)]
    pub units: Vec<String>,

    #[command(flatten)]
    pub separators: SeparatorArgs,
}

impl RemoveUnitsArgs {
    /// Execute the remove-units command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Splitting lines...");
        let lines = split_units(&content, &self.separators.line_separator);

        let removal: HashSet<&str> = self.units.iter().map(String::as_str).collect();

        log::info!("Removing units...");
        let mut changed = 0usize;
        let new_lines: Vec<String> = lines
            .iter()
            .map(|line| {
                let kept: Vec<&str> = split_units(line, &self.separators.unit_separator)
                    .into_iter()
                    .filter(|unit| !removal.contains(unit))
                    .collect();
                let new_line = join_units(&kept, &self.separators.unit_separator);
                if new_line != *line {
                    changed += 1;
                }
                new_line
            })
            .collect();

        if changed == 0 {
            return Ok(Completion::Unchanged);
        }
        log::info!("Changed {changed} line(s).");

        log::info!("Rejoining lines...");
        let borrowed: Vec<&str> = new_lines.iter().map(String::as_str).collect();
        let new_content = join_units(&borrowed, &self.separators.line_separator);

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}
