//! Blog page layout

use maud::{Markup, html};

use super::layout::{LayoutComponent, MainLayout, Rendered};
use super::metadata::{PageMetadata, SiteMetadata, seo};
use crate::chrome::DocumentChrome;
use crate::props::{LayoutProps, PageContext};

pub const BLOG_TITLE: &str = "Blog";

pub const BLOG_KEYWORDS: &str =
    "git, data, version control, machine learning models management, datasets";

pub const BLOG_DESCRIPTION: &str = concat!(
    "Data Version Control Blog. We write about machine learning workflow. ",
    "From data versioning and processing to model productionization. We share ",
    "our news, findings, interesting reads, community takeaways."
);

/// Body class held while a blog layout is mounted.
pub const BLOG_LAYOUT_CLASS: &str = "layout-blog";

/// Loader for embedded Reddit posts.
pub const REDDIT_WIDGET_SRC: &str = "//embed.redditmedia.com/widgets/platform.js";

/// Builds blog head metadata for a page context
///
/// Pagination info is passed through untouched; a missing value stays `None`.
pub fn blog_metadata(context: &PageContext) -> PageMetadata {
    PageMetadata {
        title: BLOG_TITLE.to_string(),
        description: BLOG_DESCRIPTION.to_string(),
        keywords: BLOG_KEYWORDS.to_string(),
        default_meta_title: true,
        page_info: context.page_info.clone(),
    }
}

fn main_props(props: LayoutProps) -> LayoutProps {
    LayoutProps {
        class_name: Some(BLOG_LAYOUT_CLASS.to_string()),
        ..props
    }
}

/// Blog layout: blog metadata over the main layout.
#[derive(Debug)]
pub struct BlogLayout {
    main: MainLayout,
    metadata: PageMetadata,
    site: SiteMetadata,
}

impl BlogLayout {
    /// Replaces the site defaults used for head metadata.
    pub fn with_site(mut self, site: SiteMetadata) -> Self {
        self.site = site;
        self
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn main(&self) -> &MainLayout {
        &self.main
    }
}

impl LayoutComponent for BlogLayout {
    fn mount(chrome: &DocumentChrome, props: LayoutProps) -> Self {
        let metadata = blog_metadata(&props.page_context);
        Self {
            main: MainLayout::mount(chrome, main_props(props)),
            metadata,
            site: SiteMetadata::default(),
        }
    }

    fn update(&mut self, props: LayoutProps) {
        self.metadata = blog_metadata(&props.page_context);
        self.main.update(main_props(props));
    }

    fn render(&self, children: Markup) -> Rendered {
        let widget = html! {
            script async src=(REDDIT_WIDGET_SRC) {}
        };

        Rendered {
            head: seo(&self.metadata, &self.site, Some(widget)),
            body: self.main.render(children).body,
        }
    }
}
