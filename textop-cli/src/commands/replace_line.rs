//! Replace-line command implementation

use std::path::PathBuf;

use clap::Args;
use textop_core::replace_lines;

use crate::commands::Completion;
use crate::error::CliResult;
use crate::files;

/// Arguments for the replace-line command
#[derive(Debug, Args)]
pub struct ReplaceLineArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Regex pattern to replace
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Replace the pattern with this text
    #[arg(value_name = "REPLACE-WITH")]
    pub replace_with: String,

    /// Line separator
    #[arg(long = "lsep", value_name = "STRING", default_value = "\n")]
    pub line_separator: String,
}

impl ReplaceLineArgs {
    /// Execute the replace-line command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Replacing...");
        let (new_content, changed) = replace_lines(
            &content,
            &self.line_separator,
            &self.pattern,
            &self.replace_with,
        )?;

        if changed == 0 {
            return Ok(Completion::Unchanged);
        }
        log::info!("Changed {changed} line(s).");

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}
