//! # Listener (Observer)
//!
//! A [`TextView`] owns some text and a list of [`TextChangedListener`]s. Every
//! [`set_text`](TextView::set_text) notifies each listener with the old and new text,
//! synchronously and in registration order.
//!
//! Listeners are shared with the caller through [`Rc`], so the caller can keep a
//! handle and inspect what the listener saw:
//!
//! ```rust
//! use patterns_recipe::listener::{PrintingTextChangedListener, TextView};
//! use std::rc::Rc;
//!
//! let listener = Rc::new(PrintingTextChangedListener::new());
//! let mut view = TextView::new();
//! view.add_listener(listener.clone());
//!
//! view.set_text("Lorem ipsum");
//! view.set_text("dolor sit amet");
//!
//! assert_eq!(listener.text(), "Text is changed: Lorem ipsum -> dolor sit amet");
//! ```
//!
//! Closures are listeners too: anything `Fn(&str, &str)` can be registered.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// Text a fresh [`TextView`] shows.
pub const INITIAL_TEXT: &str = "<empty>";

/// Callback for text changes.
pub trait TextChangedListener {
    fn on_text_changed(&self, old_text: &str, new_text: &str);
}

impl<F> TextChangedListener for F
where
    F: Fn(&str, &str),
{
    fn on_text_changed(&self, old_text: &str, new_text: &str) {
        self(old_text, new_text)
    }
}

/// Remembers a description of the most recent change.
#[derive(Debug, Default)]
pub struct PrintingTextChangedListener {
    text: RefCell<String>,
}

impl PrintingTextChangedListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description of the last change seen, or `""` before any.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextChangedListener for PrintingTextChangedListener {
    fn on_text_changed(&self, old_text: &str, new_text: &str) {
        let line = format!("Text is changed: {old_text} -> {new_text}");
        info!("{line}");
        *self.text.borrow_mut() = line;
    }
}

/// Handle returned by [`TextView::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Observable text.
pub struct TextView {
    text: String,
    listeners: Vec<(ListenerId, Rc<dyn TextChangedListener>)>,
    next_id: u64,
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextView")
            .field("text", &self.text)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TextView {
    pub fn new() -> Self {
        Self {
            text: INITIAL_TEXT.to_string(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn add_listener(&mut self, listener: Rc<dyn TextChangedListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(?id, size = self.listeners.len(), "Listener added");
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        let removed = self.listeners.len() != before;
        debug!(?id, removed, "Listener removed");
        removed
    }

    /// Replace the text, then notify every listener.
    ///
    /// Listeners are notified even if the text did not actually change.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        let old_text = std::mem::replace(&mut self.text, new_text.into());
        for (_, listener) in &self.listeners {
            listener.on_text_changed(&old_text, &self.text);
        }
    }
}
