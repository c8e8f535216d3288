//! Keyboard accessibility mode

use maud::{Markup, PreEscaped, html};

use crate::chrome::{DocumentChrome, KeyListener, KeyOutcome};

/// Body class marking that the visitor navigates with the keyboard.
pub const TABBING_CLASS: &str = "user-is-tabbing";

/// Browser-side equivalent of [`FirstTabHandler`] for the static page.
const FIRST_TAB_SCRIPT: &str = concat!(
    "(function(){function handleFirstTab(e){if(e.key==='Tab'){",
    "document.body.classList.add('user-is-tabbing');",
    "window.removeEventListener('keydown',handleFirstTab);}}",
    "window.addEventListener('keydown',handleFirstTab);})();"
);

/// Switches the document into keyboard mode on the first Tab press.
///
/// Focus outlines are hidden for mouse users until this class appears. The
/// handler detaches itself after firing since the mode never turns off.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstTabHandler;

impl KeyListener for FirstTabHandler {
    fn on_key_down(&self, key: &str, chrome: &DocumentChrome) -> KeyOutcome {
        if key != "Tab" {
            return KeyOutcome::Continue;
        }

        chrome.insert_class(TABBING_CLASS);
        KeyOutcome::Detach
    }
}

/// Renders the inline script installing the first-Tab listener in a browser.
pub fn first_tab_script() -> Markup {
    html! {
        script { (PreEscaped(FIRST_TAB_SCRIPT)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_first_tab_enters_keyboard_mode() {
        // Arrange
        let chrome = DocumentChrome::new();
        let guard = chrome.install_global_listener(Rc::new(FirstTabHandler));

        // Act
        chrome.dispatch_key_down("Tab");

        // Assert
        assert!(chrome.contains(TABBING_CLASS));
        assert!(!chrome.is_installed(guard.id()), "Handler detaches after Tab");
    }

    #[test]
    fn test_other_keys_ignored() {
        // Arrange
        let chrome = DocumentChrome::new();
        let guard = chrome.install_global_listener(Rc::new(FirstTabHandler));

        // Act
        chrome.dispatch_key_down("Enter");
        chrome.dispatch_key_down("t");

        // Assert
        assert!(!chrome.contains(TABBING_CLASS));
        assert!(chrome.is_installed(guard.id()));
    }

    #[test]
    fn test_script_listens_for_tab() {
        let html = first_tab_script().into_string();

        assert!(html.starts_with("<script>"));
        assert!(html.contains("'Tab'"));
        assert!(html.contains(TABBING_CLASS));
    }
}
