//! Site footer component

use maud::{Markup, html};

const FOOTER_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Product",
        &[
            ("Overview", "/"),
            ("Features", "/features"),
            ("Pricing", "/pricing"),
        ],
    ),
    (
        "Help",
        &[
            ("Use Cases", "/doc/use-cases"),
            ("Blog", "/blog"),
            ("Tutorials", "/doc/start"),
        ],
    ),
    (
        "Community",
        &[
            ("Chat", "/chat"),
            ("Forum", "/community"),
            ("GitHub", "https://github.com/iterative/dvc"),
        ],
    ),
];

/// Renders site footer with link sections and copyright line
pub fn layout_footer() -> Markup {
    html! {
        footer id="footer" class="footer" {
            div class="footer-inner" {
                @for (title, links) in FOOTER_SECTIONS {
                    section class="footer-section" {
                        h2 class="footer-heading" { (title) }
                        ul class="footer-links" {
                            @for (label, href) in *links {
                                li { a class="footer-link" href=(href) { (label) } }
                            }
                        }
                    }
                }
            }
            p class="footer-copyright" { "© Iterative, Inc." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_renders_all_sections() {
        let html = layout_footer().into_string();

        assert!(html.starts_with("<footer id=\"footer\""));
        assert!(html.contains("Product"));
        assert!(html.contains("Help"));
        assert!(html.contains("Community"));
        assert!(html.contains("© Iterative, Inc."));
    }
}
