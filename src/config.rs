//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::components::metadata::SiteMetadata;
use crate::props::{LayoutModifier, PageContext, PageInfo};

/// Command line configuration for blogshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "blogshell", version, about, long_about = None)]
pub struct Config {
    /// HTML fragment rendered as page content
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Current page number of a paginated listing
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Site-relative path of the previous page
    #[arg(long)]
    pub prev_page: Option<String>,

    /// Site-relative path of the next page
    #[arg(long)]
    pub next_page: Option<String>,

    /// Header modifier token (repeatable)
    #[arg(long = "modifier")]
    pub modifiers: Vec<String>,

    /// Absolute site origin used for pagination links
    #[arg(long, default_value = "https://dvc.org")]
    pub site_url: String,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content file does not exist, the page number is
    /// zero, or the site URL is not absolute.
    pub fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content {
            if !content.is_file() {
                bail!("Content file does not exist: {}", content.display());
            }
        }

        if self.page == 0 {
            bail!("Page numbers start at 1");
        }

        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            bail!("Site URL must be absolute: {}", self.site_url);
        }

        Ok(())
    }

    /// Returns page context carrying pagination info.
    ///
    /// Pagination info is omitted for a lone first page so the page renders
    /// as unpaginated.
    pub fn page_context(&self) -> PageContext {
        let paginated = self.page > 1 || self.prev_page.is_some() || self.next_page.is_some();
        let page_info = paginated.then(|| PageInfo {
            current_page: self.page,
            prev_page: self.prev_page.clone(),
            next_page: self.next_page.clone(),
        });

        PageContext { page_info }
    }

    pub fn layout_modifiers(&self) -> Vec<LayoutModifier> {
        self.modifiers.iter().map(|m| LayoutModifier::new(m.as_str())).collect()
    }

    /// Returns site metadata with the configured origin.
    pub fn site(&self) -> SiteMetadata {
        SiteMetadata {
            site_url: self.site_url.clone(),
            ..SiteMetadata::default()
        }
    }
}
