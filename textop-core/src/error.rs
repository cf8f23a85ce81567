//! Error types for text transformations

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid replacement pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    /// Malformed dictionary input
    #[error("Dictionary line {line}: {reason}")]
    Dictionary { line: usize, reason: String },

    /// Dictionary entry without any pronunciation
    #[error("No pronunciations for unit \"{0}\"")]
    NoPronunciations(String),

    /// Pronunciation weights that cannot form a distribution
    #[error("Invalid pronunciation weights for unit \"{0}\"")]
    InvalidWeights(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_pool_error_display() {
        let error = CoreError::ThreadPool("no threads".to_string());
        assert_eq!(error.to_string(), "Failed to build worker pool: no threads");
    }

    #[test]
    fn test_dictionary_error_display() {
        let error = CoreError::Dictionary {
            line: 3,
            reason: "missing phonemes".to_string(),
        };
        assert_eq!(error.to_string(), "Dictionary line 3: missing phonemes");
    }

    #[test]
    fn test_pattern_error_from_regex() {
        let regex_error = regex::Regex::new("[unclosed").unwrap_err();
        let error = CoreError::from(regex_error);
        assert!(error.to_string().starts_with("Invalid pattern:"));
    }
}
