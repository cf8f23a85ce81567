//! Unit occurrence statistics
//!
//! Sequential counting over the splitter's output; the table is sorted by
//! occurrences descending, then unit ascending, for stable output.

use std::collections::HashMap;

use crate::split::split_units;

/// One row of the occurrence table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCount {
    pub occurrences: u64,
    pub unit: String,
}

/// Counts every unit occurrence in `content`.
pub fn unit_counts(content: &str, line_separator: &str, unit_separator: &str) -> Vec<UnitCount> {
    log::info!("Splitting lines...");
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for line in split_units(content, line_separator) {
        for unit in split_units(line, unit_separator) {
            *counts.entry(unit).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<UnitCount> = counts
        .into_iter()
        .map(|(unit, occurrences)| UnitCount {
            occurrences,
            unit: unit.to_string(),
        })
        .collect();
    rows.sort_unstable_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.unit.cmp(&b.unit))
    });
    rows
}
