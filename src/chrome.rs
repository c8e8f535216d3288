//! Document chrome controller
//!
//! Owns the document body class list and the global key listener registry.
//! Layouts mutate this state only through guards, so every class acquired on
//! mount is released on unmount and every installed listener is removed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

/// Identifies one installed global listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// What a listener wants after handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Stay installed.
    Continue,
    /// Remove this listener from the registry.
    Detach,
}

/// Global key-down listener.
pub trait KeyListener {
    /// Handles one key-down event. `key` follows DOM `KeyboardEvent.key`
    /// naming (`"Tab"`, `"Enter"`, `"a"`).
    fn on_key_down(&self, key: &str, chrome: &DocumentChrome) -> KeyOutcome;
}

/// One observable change to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeEvent {
    ClassAdded(String),
    ClassRemoved(String),
    ListenerInstalled(ListenerId),
    ListenerRemoved(ListenerId),
}

/// Install and removal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeStats {
    pub listener_installs: usize,
    pub listener_removals: usize,
}

#[derive(Debug)]
struct BodyClass {
    name: String,
    holds: usize,
    pinned: bool,
}

struct Registration {
    id: ListenerId,
    listener: Rc<dyn KeyListener>,
}

#[derive(Default)]
struct ChromeState {
    classes: Vec<BodyClass>,
    listeners: Vec<Registration>,
    next_listener: u64,
    stats: ChromeStats,
    history: Vec<ChromeEvent>,
}

impl ChromeState {
    fn class_mut(&mut self, name: &str) -> &mut BodyClass {
        let idx = match self.classes.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.classes.push(BodyClass {
                    name: name.to_string(),
                    holds: 0,
                    pinned: false,
                });
                self.history.push(ChromeEvent::ClassAdded(name.to_string()));
                self.classes.len() - 1
            }
        };
        &mut self.classes[idx]
    }

    fn remove_unheld(&mut self, idx: usize) {
        let class = &self.classes[idx];
        if class.holds == 0 && !class.pinned {
            let removed = self.classes.remove(idx);
            self.history.push(ChromeEvent::ClassRemoved(removed.name));
        }
    }
}

/// Shared handle to the document body state.
///
/// Cloning is cheap and every clone observes the same document. The handle is
/// single threaded, matching a UI thread.
#[derive(Clone, Default)]
pub struct DocumentChrome {
    state: Rc<RefCell<ChromeState>>,
}

impl DocumentChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hold on `class`, inserting it into the body class list if it
    /// was absent. The hold is released when the returned guard drops.
    ///
    /// `class` is a single class token and must not contain whitespace.
    pub fn acquire(&self, class: &str) -> ClassGuard {
        {
            let mut state = self.state.borrow_mut();
            let entry = state.class_mut(class);
            entry.holds += 1;
            debug!(class, holds = entry.holds, "acquired body class");
        }

        ClassGuard {
            chrome: self.clone(),
            class: class.to_string(),
        }
    }

    /// Releases the hold owned by `guard`.
    ///
    /// Holds are only reachable through their guards, so a class acquired by
    /// a mounted layout cannot be released from outside. The class leaves the
    /// body once its last hold is gone, unless it was pinned with
    /// [`insert_class`](Self::insert_class).
    pub fn release(&self, guard: ClassGuard) {
        drop(guard);
    }

    fn release_hold(&self, class: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(idx) = state
            .classes
            .iter()
            .position(|c| c.name == class && c.holds > 0)
        else {
            trace!(class, "release without outstanding hold");
            return false;
        };

        state.classes[idx].holds -= 1;
        debug!(class, holds = state.classes[idx].holds, "released body class");
        state.remove_unheld(idx);
        true
    }

    /// Inserts `class` without a paired release. Used for document-wide
    /// modes that persist once entered.
    pub fn insert_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.class_mut(class).pinned = true;
        debug!(class, "inserted body class");
    }

    pub fn contains(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c.name == class)
    }

    /// Body classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.state
            .borrow()
            .classes
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Body `class` attribute value, or `None` when the list is empty.
    pub fn class_attr(&self) -> Option<String> {
        let classes = self.classes();
        if classes.is_empty() {
            None
        } else {
            Some(classes.join(" "))
        }
    }

    /// Registers `listener` for global key-down events until the returned
    /// guard drops or the listener detaches itself.
    pub fn install_global_listener(&self, listener: Rc<dyn KeyListener>) -> ListenerGuard {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = ListenerId(state.next_listener);
            state.next_listener += 1;
            state.listeners.push(Registration { id, listener });
            state.stats.listener_installs += 1;
            state.history.push(ChromeEvent::ListenerInstalled(id));
            id
        };
        debug!(?id, "installed global key listener");

        ListenerGuard {
            chrome: self.clone(),
            id,
        }
    }

    /// Removes an installed listener. Returns false if it was not installed.
    pub fn remove_global_listener(&self, id: ListenerId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|r| r.id != id);
        if state.listeners.len() == before {
            return false;
        }

        state.stats.listener_removals += 1;
        state.history.push(ChromeEvent::ListenerRemoved(id));
        debug!(?id, "removed global key listener");
        true
    }

    pub fn is_installed(&self, id: ListenerId) -> bool {
        self.state.borrow().listeners.iter().any(|r| r.id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn stats(&self) -> ChromeStats {
        self.state.borrow().stats
    }

    /// Every change applied to the document, oldest first.
    pub fn history(&self) -> Vec<ChromeEvent> {
        self.state.borrow().history.clone()
    }

    /// Delivers a key-down event to every installed listener.
    ///
    /// Listeners run in installation order and may mutate the chrome. Returns
    /// the number of listeners invoked.
    pub fn dispatch_key_down(&self, key: &str) -> usize {
        let snapshot: Vec<(ListenerId, Rc<dyn KeyListener>)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|r| (r.id, Rc::clone(&r.listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in snapshot {
            // An earlier listener may have removed this one.
            if !self.is_installed(id) {
                continue;
            }
            invoked += 1;
            if listener.on_key_down(key, self) == KeyOutcome::Detach {
                self.remove_global_listener(id);
            }
        }
        invoked
    }
}

impl fmt::Debug for DocumentChrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DocumentChrome")
            .field("classes", &state.classes)
            .field("listeners", &state.listeners.len())
            .field("stats", &state.stats)
            .finish()
    }
}

/// Hold on a body class. Releases the hold on drop.
#[must_use = "dropping the guard releases the class immediately"]
#[derive(Debug)]
pub struct ClassGuard {
    chrome: DocumentChrome,
    class: String,
}

impl ClassGuard {
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Drop for ClassGuard {
    fn drop(&mut self) {
        self.chrome.release_hold(&self.class);
    }
}

/// Registration of a global key listener. Removes it on drop.
#[must_use = "dropping the guard removes the listener immediately"]
#[derive(Debug)]
pub struct ListenerGuard {
    chrome: DocumentChrome,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.chrome.remove_global_listener(self.id);
    }
}
