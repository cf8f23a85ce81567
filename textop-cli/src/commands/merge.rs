//! Merge command implementation

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use crate::commands::Completion;
use crate::error::CliResult;
use crate::files;
use crate::progress::ProgressReporter;

/// Arguments for the merge command
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Text files that should be merged together
    #[arg(value_name = "INPUT-FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Separate file contents with this text while merging
    #[arg(long, value_name = "STRING", default_value = "\n")]
    pub sep: String,
}

impl MergeArgs {
    /// Execute the merge command
    ///
    /// Unreadable inputs are skipped with an error in the log; the merged
    /// output of the readable files is still written, and the run fails
    /// afterwards if anything was skipped.
    pub fn execute(&self, quiet: bool) -> CliResult<Completion> {
        let mut reporter = ProgressReporter::new(quiet);
        reporter.init_files(self.files.len() as u64);

        let mut texts = Vec::with_capacity(self.files.len());
        let mut failed = 0usize;
        for path in &self.files {
            match files::read_text(path) {
                Ok(text) => texts.push(text),
                Err(error) => {
                    log::error!("File couldn't be loaded: {error:#}");
                    failed += 1;
                }
            }
            reporter.file_completed(&path.display().to_string());
        }
        reporter.finish();

        log::info!("Merging files...");
        let merged = texts.join(&self.sep);

        log::info!("Saving merged output...");
        files::save_text(&self.output, &merged)?;
        log::info!("Written output to: {}", self.output.display());

        if failed > 0 {
            bail!("{failed} file(s) couldn't be loaded");
        }
        Ok(Completion::Done)
    }
}
