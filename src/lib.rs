//! Page shell components for a static blog site.

pub mod accessibility;
mod assets;
pub mod chrome;
pub mod components;
mod config;
mod generators;
pub mod props;

pub use assets::{BLOG_STYLESHEET, write_css_assets};
pub use chrome::{
    ChromeEvent, ChromeStats, ClassGuard, DocumentChrome, KeyListener, KeyOutcome, ListenerGuard,
    ListenerId,
};
pub use components::blog::{BlogLayout, blog_metadata};
pub use components::layout::{LayoutComponent, MainLayout, Rendered};
pub use components::metadata::{PageMetadata, SiteMetadata, seo};
pub use config::Config;
pub use generators::{generate_blog_page, read_content, render_blog_page};
pub use props::{LayoutModifier, LayoutProps, PageContext, PageInfo};
