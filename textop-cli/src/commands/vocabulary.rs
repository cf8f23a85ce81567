//! Extract-vocabulary command implementation

use std::path::PathBuf;

use clap::Args;
use textop_core::{extract_vocabulary, VocabularyOptions};

use crate::commands::{Completion, PoolArgs, SeparatorArgs};
use crate::error::CliResult;
use crate::files;
use crate::progress::ProgressReporter;

/// Arguments for the extract-vocabulary command
#[derive(Debug, Args)]
pub struct ExtractVocabularyArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output file to write the vocabulary
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Include empty text in the vocabulary if it occurs
    #[arg(long)]
    pub include_empty: bool,

    #[command(flatten)]
    pub separators: SeparatorArgs,

    #[command(flatten)]
    pub pool: PoolArgs,
}

impl ExtractVocabularyArgs {
    /// Execute the extract-vocabulary command
    pub fn execute(&self, quiet: bool) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        let options = VocabularyOptions {
            line_separator: self.separators.line_separator.clone(),
            unit_separator: self.separators.unit_separator.clone(),
            include_empty: self.include_empty,
            pool: self.pool.to_options(),
        };

        let mut reporter = ProgressReporter::new(quiet);
        reporter.init_spinner("Extracting vocabulary");
        let vocabulary = extract_vocabulary(&content, &options)?;
        reporter.finish();

        log::info!("Saving...");
        files::save_text(&self.output, &vocabulary.join("\n"))?;
        log::info!("Written vocabulary to: {}", self.output.display());
        Ok(Completion::Done)
    }
}
