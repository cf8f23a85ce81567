//! Reading and writing the managed text files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes text to a file, creating parent directories as needed.
///
/// The write either fully succeeds or fails without touching an existing
/// file's content partially (handled by writing the whole buffer at once).
pub fn save_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to save file: {}", path.display()))
}
