//! Pronunciation dictionary model
//!
//! A read-only mapping from a unit to one or more weighted pronunciations.
//! The dictionary is built once, then shared across all workers; nothing
//! mutates it during processing.

use std::collections::HashMap;

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{CoreError, Result};

/// An ordered sequence of phoneme symbols with a selection weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Pronunciation {
    pub phonemes: Vec<String>,
    pub weight: f64,
}

impl Pronunciation {
    /// Create a pronunciation from its phoneme symbols and weight.
    pub fn new(phonemes: Vec<String>, weight: f64) -> Self {
        Self { phonemes, weight }
    }

    /// Joins the phoneme symbols with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.phonemes.join(separator)
    }
}

/// Read-only mapping from unit to weighted pronunciations.
#[derive(Debug, Clone, Default)]
pub struct PronunciationDict {
    entries: HashMap<String, Vec<Pronunciation>>,
}

/// Flags controlling dictionary deserialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Skip lines starting with `;;;`.
    pub line_comments: bool,
    /// Strip `(N)` variant markers from units, merging the variants.
    pub word_numbers: bool,
    /// Drop everything after `#` on a line.
    pub pronunciation_comments: bool,
    /// Read a numeric weight between the unit and its phonemes.
    pub weights: bool,
}

impl PronunciationDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pronunciation for `unit`, keeping earlier ones.
    pub fn insert(&mut self, unit: impl Into<String>, pronunciation: Pronunciation) {
        self.entries
            .entry(unit.into())
            .or_default()
            .push(pronunciation);
    }

    /// All pronunciations for `unit`, in insertion order.
    pub fn get(&self, unit: &str) -> Option<&[Pronunciation]> {
        self.entries.get(unit).map(Vec::as_slice)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.entries.contains_key(unit)
    }

    /// Number of distinct units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a line-based dictionary: one `unit phoneme phoneme ...` entry
    /// per line, whitespace separated. Repeated units accumulate
    /// pronunciations. Entries without a weight default to weight 1.0.
    pub fn parse(text: &str, options: &ParseOptions) -> Result<Self> {
        let mut dict = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line_nr = index + 1;
            let line = if options.pronunciation_comments {
                raw.find('#').map_or(raw, |at| &raw[..at])
            } else {
                raw
            };
            if line.trim().is_empty() {
                continue;
            }
            if options.line_comments && line.starts_with(";;;") {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let unit = match tokens.next() {
                Some(token) if options.word_numbers => strip_variant_number(token),
                Some(token) => token,
                None => continue,
            };
            let mut symbols: Vec<&str> = tokens.collect();

            let weight = if options.weights {
                if symbols.is_empty() {
                    return Err(CoreError::Dictionary {
                        line: line_nr,
                        reason: "missing weight".to_string(),
                    });
                }
                let token = symbols.remove(0);
                let weight: f64 = token.parse().map_err(|_| CoreError::Dictionary {
                    line: line_nr,
                    reason: format!("invalid weight \"{token}\""),
                })?;
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(CoreError::Dictionary {
                        line: line_nr,
                        reason: format!("weight must be positive, got {weight}"),
                    });
                }
                weight
            } else {
                1.0
            };

            if symbols.is_empty() {
                return Err(CoreError::Dictionary {
                    line: line_nr,
                    reason: format!("unit \"{unit}\" has no phonemes"),
                });
            }

            let phonemes = symbols.iter().map(|s| s.to_string()).collect();
            dict.insert(unit, Pronunciation::new(phonemes, weight));
        }
        Ok(dict)
    }
}

/// Strips a trailing `(N)` variant marker, e.g. `read(2)` -> `read`.
fn strip_variant_number(unit: &str) -> &str {
    if let Some(stripped) = unit.strip_suffix(')') {
        if let Some((base, number)) = stripped.rsplit_once('(') {
            if !base.is_empty() && !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
            {
                return base;
            }
        }
    }
    unit
}

/// Selects one pronunciation by weighted random choice.
///
/// With a seed, the draw is reproducible across runs for the same entry.
/// A single pronunciation is returned directly without consulting the RNG.
pub fn select_weighted<'d>(
    unit: &str,
    pronunciations: &'d [Pronunciation],
    seed: Option<u64>,
) -> Result<&'d Pronunciation> {
    match pronunciations {
        [] => Err(CoreError::NoPronunciations(unit.to_string())),
        [only] => Ok(only),
        _ => {
            let distribution = WeightedIndex::new(pronunciations.iter().map(|p| p.weight))
                .map_err(|_| CoreError::InvalidWeights(unit.to_string()))?;
            let index = match seed {
                Some(seed) => distribution.sample(&mut StdRng::seed_from_u64(seed)),
                None => distribution.sample(&mut rand::rng()),
            };
            Ok(&pronunciations[index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pronunciation(symbols: &[&str], weight: f64) -> Pronunciation {
        Pronunciation::new(symbols.iter().map(|s| s.to_string()).collect(), weight)
    }

    #[test]
    fn test_parse_plain_entries() {
        let dict = PronunciationDict::parse("test T EST\nabc A BC", &ParseOptions::default()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("test").unwrap()[0], pronunciation(&["T", "EST"], 1.0));
    }

    #[test]
    fn test_parse_accumulates_repeated_units() {
        let dict = PronunciationDict::parse("to T UW\nto T AH", &ParseOptions::default()).unwrap();
        assert_eq!(dict.get("to").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_weights() {
        let options = ParseOptions {
            weights: true,
            ..ParseOptions::default()
        };
        let dict = PronunciationDict::parse("test 1.2 T EST", &options).unwrap();
        assert_eq!(dict.get("test").unwrap()[0].weight, 1.2);
        assert_eq!(dict.get("test").unwrap()[0].phonemes, vec!["T", "EST"]);
    }

    #[test]
    fn test_parse_rejects_non_positive_weight() {
        let options = ParseOptions {
            weights: true,
            ..ParseOptions::default()
        };
        assert!(PronunciationDict::parse("test 0 T", &options).is_err());
        assert!(PronunciationDict::parse("test -1.5 T", &options).is_err());
    }

    #[test]
    fn test_parse_line_comments() {
        let options = ParseOptions {
            line_comments: true,
            ..ParseOptions::default()
        };
        let dict = PronunciationDict::parse(";;; header\ntest T", &options).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains(";;;"));
    }

    #[test]
    fn test_parse_word_numbers_merge_variants() {
        let options = ParseOptions {
            word_numbers: true,
            ..ParseOptions::default()
        };
        let dict = PronunciationDict::parse("read R IY D\nread(2) R EH D", &options).unwrap();
        assert_eq!(dict.get("read").unwrap().len(), 2);
        assert!(!dict.contains("read(2)"));
    }

    #[test]
    fn test_parse_pronunciation_comments() {
        let options = ParseOptions {
            pronunciation_comments: true,
            ..ParseOptions::default()
        };
        let dict = PronunciationDict::parse("test T EST # a note", &options).unwrap();
        assert_eq!(dict.get("test").unwrap()[0].phonemes, vec!["T", "EST"]);
    }

    #[test]
    fn test_parse_missing_phonemes_is_an_error() {
        let result = PronunciationDict::parse("lonely", &ParseOptions::default());
        assert!(matches!(
            result,
            Err(CoreError::Dictionary { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let dict = PronunciationDict::parse("\ntest T\n\n", &ParseOptions::default()).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_strip_variant_number() {
        assert_eq!(strip_variant_number("read(2)"), "read");
        assert_eq!(strip_variant_number("read"), "read");
        assert_eq!(strip_variant_number("(2)"), "(2)");
        assert_eq!(strip_variant_number("read(x)"), "read(x)");
    }

    #[test]
    fn test_select_single_pronunciation() {
        let prons = vec![pronunciation(&["T"], 1.0)];
        let selected = select_weighted("t", &prons, None).unwrap();
        assert_eq!(selected.phonemes, vec!["T"]);
    }

    #[test]
    fn test_select_is_deterministic_with_seed() {
        let prons = vec![
            pronunciation(&["A"], 1.0),
            pronunciation(&["B"], 2.0),
            pronunciation(&["C"], 0.5),
        ];
        let first = select_weighted("u", &prons, Some(42)).unwrap();
        for _ in 0..10 {
            assert_eq!(select_weighted("u", &prons, Some(42)).unwrap(), first);
        }
    }

    #[test]
    fn test_select_without_pronunciations_fails() {
        let result = select_weighted("ghost", &[], None);
        assert!(matches!(result, Err(CoreError::NoPronunciations(_))));
    }

    #[test]
    fn test_select_respects_zero_weight_entries() {
        // All weight on the second entry; the draw can only pick it.
        let prons = vec![pronunciation(&["A"], 0.0), pronunciation(&["B"], 1.0)];
        for seed in 0..20 {
            let selected = select_weighted("u", &prons, Some(seed)).unwrap();
            assert_eq!(selected.phonemes, vec!["B"]);
        }
    }
}
