//! Chunking of line sequences for parallel processing
//!
//! A chunk is a contiguous, non-overlapping slice of the line sequence,
//! identified by its 0-based position. Concatenating all chunks in index
//! order reconstructs the original sequence exactly.

use std::num::NonZeroUsize;

/// Partitions `units` into contiguous chunks of `chunk_size` elements.
///
/// The last chunk holds the remainder. `None` means unbounded: a single
/// chunk containing all units. An empty input yields zero chunks, so the
/// chunk count is always `ceil(len / chunk_size)`.
pub fn chunk_units<'l, 't>(
    units: &'l [&'t str],
    chunk_size: Option<NonZeroUsize>,
) -> Vec<&'l [&'t str]> {
    if units.is_empty() {
        return Vec::new();
    }
    let size = chunk_size.map_or(units.len(), NonZeroUsize::get);
    units.chunks(size).collect()
}
