//! Transcribe command implementation

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use textop_core::{transcribe, ParseOptions, PronunciationDict, TranscribeOptions};

use crate::commands::{Completion, PoolArgs, SeparatorArgs};
use crate::error::CliResult;
use crate::files;
use crate::progress::ProgressReporter;

/// Arguments for the transcribe command
#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pronunciation dictionary with pronunciations for the occurring units
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Phoneme separator
    #[arg(long = "psep", value_name = "STRING", default_value = "|")]
    pub phoneme_separator: String,

    /// Seed for choosing between multiple pronunciations by weight
    #[arg(long, value_name = "NUMBER")]
    pub seed: Option<u64>,

    /// Keep units missing from the dictionary instead of removing them
    #[arg(long)]
    pub ignore_missing: bool,

    #[command(flatten)]
    pub separators: SeparatorArgs,

    #[command(flatten)]
    pub pool: PoolArgs,

    /// Consider line comments while deserializing the dictionary
    #[arg(long)]
    pub consider_comments: bool,

    /// Consider unit variant numbers while deserializing the dictionary
    #[arg(long)]
    pub consider_numbers: bool,

    /// Consider pronunciation comments while deserializing the dictionary
    #[arg(long)]
    pub consider_pronunciation_comments: bool,

    /// Consider weights while deserializing the dictionary
    #[arg(long)]
    pub consider_weights: bool,
}

impl TranscribeArgs {
    /// Execute the transcribe command
    pub fn execute(&self, quiet: bool) -> CliResult<Completion> {
        log::info!("Loading...");
        let content = files::read_text(&self.file)?;

        log::info!("Loading dictionary...");
        let dictionary_text = files::read_text(&self.dictionary)?;
        let parse_options = ParseOptions {
            line_comments: self.consider_comments,
            word_numbers: self.consider_numbers,
            pronunciation_comments: self.consider_pronunciation_comments,
            weights: self.consider_weights,
        };
        let dictionary = PronunciationDict::parse(&dictionary_text, &parse_options)
            .context("Pronunciation dictionary couldn't be read")?;
        log::debug!("Dictionary units: {}", dictionary.len());

        let options = TranscribeOptions {
            line_separator: self.separators.line_separator.clone(),
            unit_separator: self.separators.unit_separator.clone(),
            phoneme_separator: self.phoneme_separator.clone(),
            seed: self.seed,
            ignore_missing: self.ignore_missing,
            pool: self.pool.to_options(),
        };

        let mut reporter = ProgressReporter::new(quiet);
        reporter.init_spinner("Transcribing");
        let transcription = transcribe(&content, &dictionary, &options)?;
        reporter.finish();

        if !transcription.changed {
            return Ok(Completion::Unchanged);
        }

        log::info!("Saving...");
        files::save_text(&self.file, &transcription.text)?;
        Ok(Completion::Changed)
    }
}
