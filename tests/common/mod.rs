/*!
 * Common test utilities for the subedit test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// A small well-formed subtitle file
pub const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:04,000\nThis is a test subtitle.\n\n2\n00:00:05,000 --> 00:00:09,000\nIt contains multiple entries.\n\n3\n00:00:10,000 --> 00:00:14,000\nFor testing purposes.\n";

/// A subtitle file with caption noise for filter tests
pub const NOISY_SRT: &str = "1\n00:00:01,000 --> 00:00:04,000\n[FOOTSTEPS]\n\n2\n00:00:05,000 --> 00:00:09,000\nWOMAN: Ugh.\n\n3\n00:00:10,000 --> 00:00:14,000\n\u{266a} lyrics \u{266a}\n\n4\n00:00:15,000 --> 00:00:19,000\nPlain dialog stays.\n";
