//! CLI command implementations

use std::num::NonZeroUsize;

use clap::{Args, Subcommand};
use textop_core::PoolOptions;

use crate::error::CliResult;

pub mod dedup;
pub mod merge;
pub mod remove_units;
pub mod replace;
pub mod replace_line;
pub mod sort;
pub mod stats;
pub mod transcribe;
pub mod trim;
pub mod vocabulary;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge multiple text files into one
    Merge(merge::MergeArgs),

    /// Remove duplicate lines
    RemoveDuplicates(dedup::RemoveDuplicatesArgs),

    /// Sort lines
    Sort(sort::SortArgs),

    /// Replace text in the whole file
    Replace(replace::ReplaceArgs),

    /// Replace a regex pattern line by line
    ReplaceLine(replace_line::ReplaceLineArgs),

    /// Trim characters from every unit
    Trim(trim::TrimArgs),

    /// Remove units from lines
    RemoveUnits(remove_units::RemoveUnitsArgs),

    /// Extract the unit vocabulary
    ExtractVocabulary(vocabulary::ExtractVocabularyArgs),

    /// Transcribe units using a pronunciation dictionary
    Transcribe(transcribe::TranscribeArgs),

    /// Export unit occurrence statistics as CSV
    UnitStats(stats::UnitStatsArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> CliResult<Completion> {
        match self {
            Commands::Merge(args) => args.execute(quiet),
            Commands::RemoveDuplicates(args) => args.execute(),
            Commands::Sort(args) => args.execute(),
            Commands::Replace(args) => args.execute(),
            Commands::ReplaceLine(args) => args.execute(),
            Commands::Trim(args) => args.execute(),
            Commands::RemoveUnits(args) => args.execute(),
            Commands::ExtractVocabulary(args) => args.execute(quiet),
            Commands::Transcribe(args) => args.execute(quiet),
            Commands::UnitStats(args) => args.execute(),
        }
    }
}

/// Outcome of a successful command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The target file was modified
    Changed,
    /// Nothing needed to change; the file was left untouched
    Unchanged,
    /// The command produced new output; change tracking does not apply
    Done,
}

/// Line and unit separator arguments shared by unit-oriented commands
#[derive(Debug, Args)]
pub struct SeparatorArgs {
    /// Line separator
    #[arg(long = "lsep", value_name = "STRING", default_value = "\n")]
    pub line_separator: String,

    /// Unit separator; empty splits into single characters
    #[arg(long = "sep", value_name = "STRING", default_value = " ")]
    pub unit_separator: String,
}

/// Worker pool arguments shared by chunked commands
#[derive(Debug, Args)]
pub struct PoolArgs {
    /// Amount of parallel jobs
    #[arg(short = 'j', long, value_name = "N", default_value_t = num_cpus::get())]
    pub n_jobs: usize,

    /// Amount of lines to chunk into one job
    #[arg(short = 's', long, value_name = "NUMBER", default_value = "10000")]
    pub chunksize: NonZeroUsize,

    /// Amount of tasks a worker may handle before being recycled
    #[arg(short = 'm', long, value_name = "NUMBER")]
    pub max_tasks_per_worker: Option<NonZeroUsize>,
}

impl PoolArgs {
    /// Convert to the core pool options
    pub fn to_options(&self) -> PoolOptions {
        PoolOptions {
            n_jobs: self.n_jobs,
            chunk_size: Some(self.chunksize),
            max_tasks_per_worker: self.max_tasks_per_worker,
        }
    }
}
