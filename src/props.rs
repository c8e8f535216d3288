//! Layout component contracts
//!
//! Explicit prop shapes shared by every layout. Required fields are plain
//! values, optional ones are `Option` or default to empty.

use std::fmt;
use std::str::FromStr;

/// Opaque style modifier forwarded to the header.
///
/// Tokens are not deduplicated and their meaning belongs to the stylesheet.
/// Whitespace inside a token separates words, each styled as its own token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutModifier(String);

impl LayoutModifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayoutModifier {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl FromStr for LayoutModifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Pagination state of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// One-based page number.
    pub current_page: usize,
    /// Site-relative path of the previous page.
    pub prev_page: Option<String>,
    /// Site-relative path of the next page.
    pub next_page: Option<String>,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            prev_page: None,
            next_page: None,
        }
    }
}

/// Context handed to a page by the site generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Absent for pages that are not paginated.
    pub page_info: Option<PageInfo>,
}

/// Props accepted by every layout component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutProps {
    /// Extra body class held while the layout is mounted.
    pub class_name: Option<String>,
    pub modifiers: Vec<LayoutModifier>,
    pub page_context: PageContext,
}

impl LayoutProps {
    pub fn new(page_context: PageContext) -> Self {
        Self {
            page_context,
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<LayoutModifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}
