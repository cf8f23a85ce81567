//! Replace command implementation

use std::path::PathBuf;

use clap::Args;
use textop_core::replace_text;

use crate::commands::Completion;
use crate::error::CliResult;
use crate::files;

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pattern to replace
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Replace the pattern with this text
    #[arg(value_name = "REPLACE-WITH")]
    pub replace_with: String,

    /// Treat TEXT as a literal string instead of a regex pattern
    #[arg(short, long)]
    pub literal: bool,
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Replacing...");
        let new_content = replace_text(&content, &self.text, &self.replace_with, self.literal)?;

        if new_content == content {
            return Ok(Completion::Unchanged);
        }

        log::info!("Saving...");
        files::save_text(&self.file, &new_content)?;
        Ok(Completion::Changed)
    }
}
