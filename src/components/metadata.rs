//! SEO metadata components
//!
//! Produces the document head tags for a page: title, description, keywords,
//! Open Graph and Twitter cards, and pagination links. Layouts place the
//! result in the document head.

use maud::{Markup, html};

use crate::props::PageInfo;

/// Site-wide defaults for head metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Title used verbatim when a page asks for the default meta title.
    pub title: String,
    /// Title pattern where `%s` is replaced by the page title.
    pub title_template: String,
    /// Absolute site origin without trailing slash.
    pub site_url: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Data Version Control · DVC".to_string(),
            title_template: "%s | Data Version Control · DVC".to_string(),
            site_url: "https://dvc.org".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Resolves a site-relative path against `site_url`.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.site_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Metadata a page hands to the SEO component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub default_meta_title: bool,
    pub page_info: Option<PageInfo>,
}

/// Returns page title with pagination suffix
///
/// Listing pages after the first get a `" page N"` suffix so paginated
/// titles stay distinct.
pub fn page_title(meta: &PageMetadata) -> String {
    match &meta.page_info {
        Some(info) if info.current_page > 1 => {
            format!("{} page {}", meta.title, info.current_page)
        }
        _ => meta.title.clone(),
    }
}

/// Returns text for the document `<title>` element
pub fn document_title(meta: &PageMetadata, site: &SiteMetadata) -> String {
    if meta.default_meta_title {
        site.title.clone()
    } else {
        site.title_template.replace("%s", &page_title(meta))
    }
}

/// Renders head metadata tags for a page
///
/// # Arguments
///
/// * `meta`: Page metadata
/// * `site`: Site-wide defaults
/// * `extra`: Additional head markup appended after the generated tags
///
/// # Returns
///
/// Head markup
pub fn seo(meta: &PageMetadata, site: &SiteMetadata, extra: Option<Markup>) -> Markup {
    let title = page_title(meta);
    let prev = meta
        .page_info
        .as_ref()
        .and_then(|info| info.prev_page.as_deref())
        .map(|path| site.absolute_url(path));
    let next = meta
        .page_info
        .as_ref()
        .and_then(|info| info.next_page.as_deref())
        .map(|path| site.absolute_url(path));

    html! {
        title { (document_title(meta, site)) }
        meta name="description" content=(meta.description);
        meta name="keywords" content=(meta.keywords);
        meta property="og:title" content=(title);
        meta property="og:description" content=(meta.description);
        meta property="og:type" content="website";
        meta name="twitter:card" content="summary";
        meta name="twitter:title" content=(title);
        meta name="twitter:description" content=(meta.description);
        @if let Some(href) = prev {
            link rel="prev" href=(href);
        }
        @if let Some(href) = next {
            link rel="next" href=(href);
        }
        @if let Some(extra) = extra {
            (extra)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(default_meta_title: bool, page_info: Option<PageInfo>) -> PageMetadata {
        PageMetadata {
            title: "Blog".to_string(),
            description: "About things".to_string(),
            keywords: "a, b".to_string(),
            default_meta_title,
            page_info,
        }
    }

    #[test]
    fn test_page_title_first_page_unsuffixed() {
        let meta = metadata(true, Some(PageInfo::default()));

        assert_eq!(page_title(&meta), "Blog");
    }

    #[test]
    fn test_page_title_later_page_suffixed() {
        // Arrange
        let info = PageInfo {
            current_page: 3,
            ..PageInfo::default()
        };

        // Act
        let title = page_title(&metadata(true, Some(info)));

        // Assert
        assert_eq!(title, "Blog page 3");
    }

    #[test]
    fn test_document_title_default_uses_site_title() {
        let site = SiteMetadata::default();

        assert_eq!(document_title(&metadata(true, None), &site), site.title);
    }

    #[test]
    fn test_document_title_template() {
        let site = SiteMetadata::default();

        assert_eq!(
            document_title(&metadata(false, None), &site),
            "Blog | Data Version Control · DVC"
        );
    }

    #[test]
    fn test_absolute_url_variants() {
        let site = SiteMetadata {
            site_url: "https://example.com/".to_string(),
            ..SiteMetadata::default()
        };

        assert_eq!(site.absolute_url("/blog/2"), "https://example.com/blog/2");
        assert_eq!(site.absolute_url("blog/2"), "https://example.com/blog/2");
        assert_eq!(site.absolute_url("https://other.org/x"), "https://other.org/x");
    }

    #[test]
    fn test_seo_renders_meta_tags() {
        // Arrange
        let meta = metadata(false, None);

        // Act
        let html = seo(&meta, &SiteMetadata::default(), None).into_string();

        // Assert
        assert!(html.contains("<meta name=\"description\" content=\"About things\">"));
        assert!(html.contains("<meta name=\"keywords\" content=\"a, b\">"));
        assert!(html.contains("<meta property=\"og:title\" content=\"Blog\">"));
        assert!(!html.contains("rel=\"prev\""));
        assert!(!html.contains("rel=\"next\""));
    }

    #[test]
    fn test_seo_renders_pagination_links() {
        // Arrange
        let info = PageInfo {
            current_page: 2,
            prev_page: Some("/blog".to_string()),
            next_page: Some("/blog/page/3".to_string()),
        };
        let meta = metadata(true, Some(info));

        // Act
        let html = seo(&meta, &SiteMetadata::default(), None).into_string();

        // Assert
        assert!(html.contains("<link rel=\"prev\" href=\"https://dvc.org/blog\">"));
        assert!(html.contains("<link rel=\"next\" href=\"https://dvc.org/blog/page/3\">"));
        assert!(html.contains("content=\"Blog page 2\""));
    }

    #[test]
    fn test_seo_appends_extra_markup() {
        // Arrange
        let extra = html! { script src="/widget.js" {} };

        // Act
        let html = seo(&metadata(true, None), &SiteMetadata::default(), Some(extra)).into_string();

        // Assert
        assert!(html.ends_with("<script src=\"/widget.js\"></script>"));
    }
}
