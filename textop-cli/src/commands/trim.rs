//! Trim command implementation

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use textop_core::{join_units, split_units};

use crate::commands::{Completion, SeparatorArgs};
use crate::error::CliResult;
use crate::files;

/// Where to trim each unit
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TrimMode {
    /// Only from the start
    Start,
    /// Only from the end
    End,
    /// Start and end
    Both,
}

/// Arguments for the trim command
#[derive(Debug, Args)]
pub struct TrimArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Trim mode
    #[arg(value_name = "MODE", value_enum)]
    pub mode: TrimMode,

    /// Trim these characters from each unit
    #[arg(value_name = "CHARACTERS", required = true, num_args = 1..)]
    pub characters: Vec<String>,

    #[command(flatten)]
    pub separators: SeparatorArgs,
}

impl TrimArgs {
    /// Execute the trim command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Splitting lines...");
        let lines = split_units(&content, &self.separators.line_separator);

        let characters: HashSet<char> = self.characters.iter().flat_map(|s| s.chars()).collect();

        log::info!("Trimming...");
        let mut changed = false;
        let new_lines: Vec<String> = lines
            .iter()
            .map(|line| {
                let units = split_units(line, &self.separators.unit_separator);
                let trimmed: Vec<&str> = units
                    .iter()
                    .map(|unit| trim_unit(unit, self.mode, &characters))
                    .collect();
                let new_line = join_units(&trimmed, &self.separators.unit_separator);
                if new_line != *line {
                    changed = true;
                }
                new_line
            })
            .collect();

        if !changed {
            return Ok(Completion::Unchanged);
        }

        log::info!("Rejoining lines...");
        let borrowed: Vec<&str> = new_lines.iter().map(String::as_str).collect();
        let new_content = join_units(&borrowed, &self.separators.line_separator);

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}

/// Trims the configured character set from one unit.
fn trim_unit<'a>(unit: &'a str, mode: TrimMode, characters: &HashSet<char>) -> &'a str {
    let in_set = |c: char| characters.contains(&c);
    match mode {
        TrimMode::Start => unit.trim_start_matches(in_set),
        TrimMode::End => unit.trim_end_matches(in_set),
        TrimMode::Both => unit.trim_matches(in_set),
    }
}
