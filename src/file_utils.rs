use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::validation::DeliveryRecord;

// @module: File and input utilities

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !Self::dir_exists(path) {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a file, or standard input when the path is `-`
    pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if path == Path::new(STDIN_PATH) {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            return Ok(content);
        }
        Self::read_to_string(path)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}

/// Split pasted text into phone numbers: one per line, trimmed, blanks skipped
pub fn parse_number_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a number list from a file or standard input
pub fn read_number_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = FileManager::read_input(path)?;
    Ok(parse_number_list(&content))
}

/// Read delivery records from a JSON array
pub fn read_delivery_records<P: AsRef<Path>>(path: P) -> Result<Vec<DeliveryRecord>> {
    let path = path.as_ref();
    let content = FileManager::read_input(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse delivery records: {:?}", path))
}
