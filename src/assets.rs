//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");

const BLOG_PAGE: &str = include_str!("../assets/page-blog.css");

/// Stylesheet path linked from generated blog pages.
pub const BLOG_STYLESHEET: &str = "assets/blog.css";

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "blog.css",
        &[BASE, LAYOUT, HEADER, FOOTER, BLOG_PAGE],
    )?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
