//! Unit-stats command implementation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use textop_core::{unit_counts, UnitCount};

use crate::commands::{Completion, SeparatorArgs};
use crate::error::CliResult;
use crate::files;

/// Arguments for the unit-stats command
#[derive(Debug, Args)]
pub struct UnitStatsArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output .csv file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub separators: SeparatorArgs,
}

impl UnitStatsArgs {
    /// Execute the unit-stats command
    pub fn execute(&self) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Calculating counts...");
        let rows = unit_counts(
            &content,
            &self.separators.line_separator,
            &self.separators.unit_separator,
        );

        log::info!("Saving...");
        write_counts(&self.output, &rows)?;
        log::info!("Saved output to: {}", self.output.display());
        Ok(Completion::Done)
    }
}

/// Writes the occurrence table as a `;`-separated CSV with a header.
fn write_counts(path: &Path, rows: &[UnitCount]) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("Failed to open output: {}", path.display()))?;
    writer.write_record(["# Occurrences", "Unit"])?;
    for row in rows {
        writer.write_record([row.occurrences.to_string().as_str(), row.unit.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
