//! Parallel dictionary transcription
//!
//! Each line is re-written unit by unit from a pronunciation dictionary.
//! Per-chunk results carry one [`LineChange`] per line so the reducer can
//! fall back to the original line object where nothing changed, and the
//! caller can tell a no-op batch from a modifying one.

use std::borrow::Cow;

use crate::chunk::chunk_units;
use crate::dictionary::{select_weighted, PronunciationDict};
use crate::error::Result;
use crate::pool::{dispatch, PoolOptions};
use crate::split::split_units;

/// Per-line transform outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    /// The transform reproduced the line verbatim; use the original.
    Unchanged,
    /// The line was rewritten.
    Replaced(String),
}

/// Options for [`transcribe`].
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub line_separator: String,
    pub unit_separator: String,
    /// Separator between the phoneme symbols of one unit.
    pub phoneme_separator: String,
    /// Seed for the weighted pronunciation choice; same seed, same choice.
    pub seed: Option<u64>,
    /// Keep units missing from the dictionary instead of dropping them.
    pub ignore_missing: bool,
    pub pool: PoolOptions,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            unit_separator: " ".to_string(),
            phoneme_separator: "|".to_string(),
            seed: None,
            ignore_missing: false,
            pool: PoolOptions::default(),
        }
    }
}

/// A reassembled transcription and whether any line differs from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub text: String,
    pub changed: bool,
}

/// Transcribes one chunk of lines, returning one [`LineChange`] per line.
///
/// A unit missing from the dictionary is dropped from its line, unless
/// `ignore_missing` is set, in which case it passes through unchanged and
/// no lookup is attempted.
pub fn transcribe_chunk(
    lines: &[&str],
    dictionary: &PronunciationDict,
    options: &TranscribeOptions,
) -> Result<Vec<LineChange>> {
    let unit_joiner = format!(
        "{phoneme}{unit}{phoneme}",
        phoneme = options.phoneme_separator,
        unit = options.unit_separator,
    );

    let mut changes = Vec::with_capacity(lines.len());
    for line in lines {
        let mut transcribed: Vec<Cow<str>> = Vec::new();
        for unit in split_units(line, &options.unit_separator) {
            match dictionary.get(unit) {
                Some(pronunciations) => {
                    let pronunciation = select_weighted(unit, pronunciations, options.seed)?;
                    transcribed.push(Cow::Owned(
                        pronunciation.joined(&options.phoneme_separator),
                    ));
                }
                None if options.ignore_missing => transcribed.push(Cow::Borrowed(unit)),
                None => {}
            }
        }
        let new_line = transcribed.join(unit_joiner.as_str());
        if new_line == *line {
            changes.push(LineChange::Unchanged);
        } else {
            changes.push(LineChange::Replaced(new_line));
        }
    }
    Ok(changes)
}

/// Transcribes `content` using a pronunciation dictionary.
///
/// Lines are chunked, transformed in parallel, and reassembled in the
/// original order; untouched lines are carried over byte for byte.
pub fn transcribe(
    content: &str,
    dictionary: &PronunciationDict,
    options: &TranscribeOptions,
) -> Result<Transcription> {
    log::info!("Splitting lines...");
    let lines = split_units(content, &options.line_separator);
    log::debug!("Lines: {}", lines.len());

    let chunks = chunk_units(&lines, options.pool.chunk_size);
    let per_chunk = dispatch(&chunks, &options.pool, |_, chunk| {
        transcribe_chunk(chunk, dictionary, options)
    })?;

    log::info!("Rejoining lines...");
    let mut changed = false;
    let mut new_lines: Vec<&str> = Vec::with_capacity(lines.len());
    for (chunk, changes) in chunks.iter().zip(&per_chunk) {
        debug_assert_eq!(chunk.len(), changes.len());
        for (original, change) in chunk.iter().zip(changes) {
            match change {
                LineChange::Replaced(line) => {
                    changed = true;
                    new_lines.push(line);
                }
                LineChange::Unchanged => new_lines.push(*original),
            }
        }
    }

    let text = new_lines.join(&options.line_separator);
    Ok(Transcription { text, changed })
}
