//! End-to-end tests for the blogshell binary.

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Tests full binary execution generates a blog page.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let content = dir.path().join("post.html");
    fs::write(&content, "<p>E2E content</p>")?;
    let output = dir.path().join("dist");

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_blogshell"))
        .arg("--content")
        .arg(&content)
        .arg("-o")
        .arg(&output)
        .args(["--page", "2", "--prev-page", "/blog", "--modifier", "wide"])
        .arg("--no-open")
        .status()?;

    // Assert
    assert!(status.success());
    let html = fs::read_to_string(output.join("index.html"))?;
    assert!(html.contains("E2E content"));
    assert!(html.contains("Blog page 2"));
    assert!(html.contains("header--wide"));
    assert!(output.join("assets").join("blog.css").is_file());
    Ok(())
}

/// Tests invalid configuration exits with failure.
#[test]
fn test_missing_content_fails_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_blogshell"))
        .arg("--content")
        .arg(dir.path().join("missing.html"))
        .arg("-o")
        .arg(dir.path().join("dist"))
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
    assert!(!dir.path().join("dist").exists());
    Ok(())
}
