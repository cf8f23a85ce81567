//! textop CLI library
//!
//! This library provides the command-line interface for the textop
//! line/unit-oriented text transformation tools.

pub mod commands;
pub mod error;
pub mod files;
pub mod progress;

pub use error::CliResult;
