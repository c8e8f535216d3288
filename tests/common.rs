//! Shared test utilities for integration tests.
//!
//! Provides configuration builders and content fixtures used across
//! multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use blogshell::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds configuration writing into `output` with defaults for all flags.
pub fn test_config(output: &Path) -> Config {
    Config {
        content: None,
        output: output.to_path_buf(),
        page: 1,
        prev_page: None,
        next_page: None,
        modifiers: Vec::new(),
        site_url: "https://dvc.org".to_string(),
        no_open: true,
        verbose: false,
    }
}

/// Writes an HTML content fragment into a temporary directory.
///
/// # Returns
///
/// Temporary directory guard and path of the written fragment
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_content(html: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("content.html");
    fs::write(&path, html)?;
    Ok((dir, path))
}
