//! Error handling for the CLI application
//!
//! Commands operate on user-supplied paths and patterns, so errors are
//! reported with context through `anyhow` and surfaced as a failure exit
//! code by `main`.

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
