//! Parallel line/unit-oriented text transformations
//!
//! This crate implements chunked parallel map-reduce over text lines with
//! order-preserving reassembly. Text is split into lines by a configurable
//! separator, partitioned into contiguous chunks, processed by a bounded
//! worker pool with unordered completion, and reduced back into a single
//! deterministic result keyed by chunk index.
//!
//! Two transforms share this machinery: vocabulary extraction (chunk to
//! token set, reduced by set union) and dictionary transcription (chunk to
//! per-line changes, reduced by ordered re-interleaving with the original
//! lines). The simpler sequential operations (replacement, occurrence
//! statistics) live alongside them and share the splitter.
//!
//! # Example
//!
//! ```rust
//! use textop_core::{extract_vocabulary, VocabularyOptions};
//!
//! let vocabulary = extract_vocabulary("b a c\nc b a", &VocabularyOptions::default()).unwrap();
//! assert_eq!(vocabulary, vec!["a", "b", "c"]);
//! ```

pub mod chunk;
pub mod dictionary;
pub mod error;
pub mod pool;
pub mod replacement;
pub mod split;
pub mod statistics;
pub mod transcription;
pub mod vocabulary;

pub use chunk::chunk_units;
pub use dictionary::{select_weighted, ParseOptions, Pronunciation, PronunciationDict};
pub use error::{CoreError, Result};
pub use pool::{dispatch, PoolOptions, DEFAULT_CHUNK_SIZE};
pub use replacement::{replace_lines, replace_text};
pub use split::{join_units, split_units};
pub use statistics::{unit_counts, UnitCount};
pub use transcription::{transcribe, LineChange, TranscribeOptions, Transcription};
pub use vocabulary::{chunk_vocabulary, extract_vocabulary, VocabularyOptions};
