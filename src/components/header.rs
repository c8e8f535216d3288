//! Site header component

use maud::{Markup, html};

use crate::props::LayoutModifier;

/// Primary navigation entries as (label, href).
const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "/features"),
    ("Doc", "/doc"),
    ("Blog", "/blog"),
    ("Community", "/community"),
    ("Support", "/support"),
];

/// Builds the header class list from layout modifiers
///
/// Each modifier becomes a `header--<token>` class after the base `header`
/// class, in the order given. A modifier containing whitespace contributes
/// one class per word; a blank modifier contributes none.
pub fn header_classes(modifiers: &[LayoutModifier]) -> String {
    let mut classes = String::from("header");
    for word in modifiers.iter().flat_map(|m| m.as_str().split_whitespace()) {
        classes.push_str(" header--");
        classes.push_str(word);
    }
    classes
}

/// Renders site header with logo and primary navigation
///
/// # Arguments
///
/// * `modifiers`: Layout modifiers styling the header
///
/// # Returns
///
/// Header markup
pub fn layout_header(modifiers: &[LayoutModifier]) -> Markup {
    html! {
        header id="header" class=(header_classes(modifiers)) {
            div class="header-inner" {
                a class="header-logo" href="/" aria-label="Home" { "DVC" }
                nav class="header-nav" {
                    @for (label, href) in NAV_LINKS {
                        a class="header-link" href=(href) { (label) }
                    }
                }
                a class="header-cta" href="/doc/start" { "Get Started" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_classes_without_modifiers() {
        assert_eq!(header_classes(&[]), "header");
    }

    #[test]
    fn test_header_classes_keep_order_and_duplicates() {
        // Arrange
        let modifiers = vec![
            LayoutModifier::from("wide"),
            LayoutModifier::from("collapsed"),
            LayoutModifier::from("wide"),
        ];

        // Act
        let classes = header_classes(&modifiers);

        // Assert
        assert_eq!(classes, "header header--wide header--collapsed header--wide");
    }

    #[test]
    fn test_header_classes_split_whitespace_in_modifiers() {
        // Arrange
        let modifiers = vec![LayoutModifier::from("a b"), LayoutModifier::from("  ")];

        // Act
        let classes = header_classes(&modifiers);

        // Assert
        assert_eq!(classes, "header header--a header--b");
    }

    #[test]
    fn test_layout_header_renders_nav() {
        let html = layout_header(&[LayoutModifier::from("wide")]).into_string();

        assert!(html.starts_with("<header id=\"header\""));
        assert!(html.contains("header--wide"));
        assert!(html.contains("href=\"/blog\""));
        assert!(html.contains("Get Started"));
    }
}
