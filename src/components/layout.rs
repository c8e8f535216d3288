//! Page layout components
//!
//! A layout is mounted against a [`DocumentChrome`], renders markup while
//! mounted, and undoes its document side effects when dropped.

use std::rc::Rc;

use maud::{DOCTYPE, Markup, html};

use super::footer::layout_footer;
use super::header::layout_header;
use crate::accessibility::{FirstTabHandler, first_tab_script};
use crate::chrome::{ClassGuard, DocumentChrome, ListenerGuard, ListenerId};
use crate::props::{LayoutModifier, LayoutProps};

/// Body class present while any main layout is mounted.
pub const MAIN_LAYOUT_CLASS: &str = "main-layout";

/// Element id of the content region.
pub const CONTENT_ID: &str = "layoutContent";

/// Markup produced by a layout for the document head and body.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub head: Markup,
    pub body: Markup,
}

impl Rendered {
    /// Wraps rendered markup in a complete HTML document
    ///
    /// The body class list and accessibility script reflect `chrome` at the
    /// moment of the call, so render while the layout is still mounted.
    ///
    /// # Arguments
    ///
    /// * `chrome`: Document state the layout was mounted against
    /// * `stylesheets`: CSS file paths to link
    ///
    /// # Returns
    ///
    /// Complete HTML document
    pub fn document(&self, chrome: &DocumentChrome, stylesheets: &[&str]) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @for stylesheet in stylesheets {
                        link rel="stylesheet" href=(stylesheet);
                    }
                    (self.head)
                }
                body class=[chrome.class_attr()] {
                    (self.body)
                    @if chrome.listener_count() > 0 {
                        (first_tab_script())
                    }
                }
            }
        }
    }
}

/// Contract every page layout satisfies.
pub trait LayoutComponent: Sized {
    /// Applies the layout's document side effects.
    fn mount(chrome: &DocumentChrome, props: LayoutProps) -> Self;

    /// Replaces props between renders without unmounting.
    fn update(&mut self, props: LayoutProps);

    fn render(&self, children: Markup) -> Rendered;

    /// Removes the layout's document side effects.
    fn unmount(self) {
        drop(self);
    }
}

/// Base layout effect: base class plus the first-Tab listener.
///
/// Installed once per mount and never re-run on prop updates.
#[derive(Debug)]
struct BaseLayoutEffect {
    listener: ListenerGuard,
    _class: ClassGuard,
}

impl BaseLayoutEffect {
    fn install(chrome: &DocumentChrome) -> Self {
        let class = chrome.acquire(MAIN_LAYOUT_CLASS);
        let listener = chrome.install_global_listener(Rc::new(FirstTabHandler));
        Self {
            listener,
            _class: class,
        }
    }
}

/// Caller-supplied body class, held while mounted.
///
/// The value is split on whitespace like an HTML `class` attribute, each
/// token held separately.
#[derive(Debug)]
struct CallerClass {
    name: String,
    _guards: Vec<ClassGuard>,
}

impl CallerClass {
    fn normalize(class_name: Option<&str>) -> Option<String> {
        let tokens: Vec<&str> = class_name?.split_whitespace().collect();
        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join(" "))
        }
    }

    fn acquire(chrome: &DocumentChrome, name: String) -> Self {
        let guards = name.split(' ').map(|token| chrome.acquire(token)).collect();
        Self {
            name,
            _guards: guards,
        }
    }
}

/// Generic site layout: header, content region, footer.
#[derive(Debug)]
pub struct MainLayout {
    chrome: DocumentChrome,
    modifiers: Vec<LayoutModifier>,
    // Field order is cleanup order: the caller's class goes before the base effect.
    class_name: Option<CallerClass>,
    base: BaseLayoutEffect,
}

impl MainLayout {
    fn acquire_class(chrome: &DocumentChrome, class_name: Option<&str>) -> Option<CallerClass> {
        CallerClass::normalize(class_name).map(|name| CallerClass::acquire(chrome, name))
    }

    /// Caller class with whitespace collapsed, if one is held.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_ref().map(|class| class.name.as_str())
    }

    pub fn modifiers(&self) -> &[LayoutModifier] {
        &self.modifiers
    }

    /// Id of the global key listener installed by this mount.
    pub fn listener_id(&self) -> ListenerId {
        self.base.listener.id()
    }
}

impl LayoutComponent for MainLayout {
    fn mount(chrome: &DocumentChrome, props: LayoutProps) -> Self {
        let class_name = Self::acquire_class(chrome, props.class_name.as_deref());
        let base = BaseLayoutEffect::install(chrome);

        Self {
            chrome: chrome.clone(),
            modifiers: props.modifiers,
            class_name,
            base,
        }
    }

    fn update(&mut self, props: LayoutProps) {
        let next = CallerClass::normalize(props.class_name.as_deref());
        if next.as_deref() != self.class_name() {
            // Release before acquiring so a shared name never double counts.
            self.class_name = None;
            self.class_name = next.map(|name| CallerClass::acquire(&self.chrome, name));
        }
        self.modifiers = props.modifiers;
    }

    fn render(&self, children: Markup) -> Rendered {
        Rendered {
            head: html! {},
            body: html! {
                (layout_header(&self.modifiers))
                div id=(CONTENT_ID) {
                    (children)
                }
                (layout_footer())
            },
        }
    }
}
