//! Sort command implementation

use std::path::PathBuf;

use clap::Args;
use textop_core::{join_units, split_units};

use crate::commands::Completion;
use crate::error::CliResult;
use crate::files;

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Line separator
    #[arg(long = "lsep", value_name = "STRING", default_value = "\n")]
    pub line_separator: String,

    /// Sort descending; default is ascending
    #[arg(long)]
    pub desc: bool,
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Splitting lines...");
        let lines = split_units(&content, &self.line_separator);

        log::info!("Sorting lines...");
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        if self.desc {
            sorted.reverse();
        }

        if sorted == lines {
            log::info!("File was already sorted.");
            return Ok(Completion::Unchanged);
        }

        log::info!("Rejoining lines...");
        let new_content = join_units(&sorted, &self.line_separator);

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}
