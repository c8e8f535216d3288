//! HTML page generators for blog pages.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{BLOG_STYLESHEET, write_css_assets};
use crate::chrome::DocumentChrome;
use crate::components::blog::BlogLayout;
use crate::components::layout::LayoutComponent;
use crate::config::Config;
use crate::props::LayoutProps;

/// Reads an HTML content fragment.
///
/// A missing path yields empty content. The fragment is trusted markup and
/// is embedded without escaping.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8.
pub fn read_content(path: Option<&Path>) -> Result<Markup> {
    let Some(path) = path else {
        return Ok(PreEscaped(String::new()));
    };

    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = html.len(), "read page content");

    Ok(PreEscaped(html))
}

/// Renders a complete blog page document.
///
/// Mounts a [`BlogLayout`] on a fresh document, renders it while mounted,
/// then unmounts so the document is left clean.
///
/// # Arguments
///
/// * `props`: Layout props for the page
/// * `config`: Configuration supplying site metadata
/// * `children`: Page content
///
/// # Returns
///
/// HTML document markup
pub fn render_blog_page(props: LayoutProps, config: &Config, children: Markup) -> Markup {
    let chrome = DocumentChrome::new();
    let layout = BlogLayout::mount(&chrome, props).with_site(config.site());

    let document = layout
        .render(children)
        .document(&chrome, &[BLOG_STYLESHEET]);

    layout.unmount();
    debug!(?chrome, "blog layout unmounted");

    document
}

/// Generates blog page and assets into the output directory.
///
/// # Returns
///
/// Path of the written `index.html`
///
/// # Errors
///
/// Returns error if:
/// - Content file cannot be read
/// - Output or assets directory cannot be created
/// - Page or CSS assets cannot be written
///
/// # Examples
///
/// ```no_run
/// use blogshell::{Config, generate_blog_page};
///
/// let config = Config::parse();
/// let index = generate_blog_page(&config)?;
/// println!("{}", index.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_blog_page(config: &Config) -> Result<PathBuf> {
    let children = read_content(config.content.as_deref())?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let props = LayoutProps::new(config.page_context()).with_modifiers(config.layout_modifiers());
    let document = render_blog_page(props, config, children);

    let index_path = config.output.join("index.html");
    fs::write(&index_path, document.into_string())
        .with_context(|| format!("Failed to write page: {}", index_path.display()))?;
    info!(path = %index_path.display(), "generated blog page");

    Ok(index_path)
}
