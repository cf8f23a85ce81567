//! Parallel vocabulary extraction
//!
//! Each chunk is tokenized into a set of units; the per-chunk sets are
//! unioned and sorted for deterministic output. The result is invariant
//! under the chunk size.

use std::collections::HashSet;

use crate::chunk::chunk_units;
use crate::error::Result;
use crate::pool::{dispatch, PoolOptions};
use crate::split::split_units;

/// Options for [`extract_vocabulary`].
#[derive(Debug, Clone)]
pub struct VocabularyOptions {
    pub line_separator: String,
    pub unit_separator: String,
    /// Keep the empty-string token if it occurs.
    pub include_empty: bool,
    pub pool: PoolOptions,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            unit_separator: " ".to_string(),
            include_empty: false,
            pool: PoolOptions::default(),
        }
    }
}

/// Tokenizes every line of a chunk and unions the tokens.
///
/// Pure function of its inputs; empty unit separator tokenizes into
/// individual characters.
pub fn chunk_vocabulary<'t>(lines: &[&'t str], unit_separator: &str) -> HashSet<&'t str> {
    let mut vocabulary = HashSet::new();
    for line in lines {
        vocabulary.extend(split_units(line, unit_separator));
    }
    vocabulary
}

/// Extracts the ordered, de-duplicated unit vocabulary of `content`.
pub fn extract_vocabulary(content: &str, options: &VocabularyOptions) -> Result<Vec<String>> {
    log::info!("Splitting lines...");
    let lines = split_units(content, &options.line_separator);
    log::debug!("Lines: {}", lines.len());

    let chunks = chunk_units(&lines, options.pool.chunk_size);
    let sets = dispatch(&chunks, &options.pool, |_, chunk| {
        Ok(chunk_vocabulary(chunk, &options.unit_separator))
    })?;

    let mut vocabulary: HashSet<&str> = HashSet::new();
    for set in &sets {
        vocabulary.extend(set);
    }
    if !options.include_empty {
        vocabulary.remove("");
    }
    log::info!("Extracted vocabulary size: {}", vocabulary.len());

    let mut result: Vec<String> = vocabulary.iter().map(|unit| unit.to_string()).collect();
    result.sort_unstable();
    Ok(result)
}
