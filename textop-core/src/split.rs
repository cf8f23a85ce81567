//! Line and unit splitting
//!
//! Text is addressed only through its decomposition into lines (or units
//! within a line). Splitting borrows slices out of the input instead of
//! copying, and joining with the same separator is the exact inverse.

/// Splits `text` on an exact separator string, borrowing slices from the
/// input.
///
/// An empty separator splits into individual characters, one slice per
/// `char`. The separator is matched literally, never as a pattern.
pub fn split_units<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        text.char_indices()
            .map(|(start, c)| &text[start..start + c.len_utf8()])
            .collect()
    } else {
        text.split(separator).collect()
    }
}

/// Joins units with a separator; the inverse of [`split_units`].
pub fn join_units(units: &[&str], separator: &str) -> String {
    units.join(separator)
}
