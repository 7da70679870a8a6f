//! UI collaborator contracts
//!
//! A binding needs three things from the page it lives on: a text input it
//! can read and write, a panel whose children it can replace and whose
//! visibility it can toggle, and a way to resolve both from element ids.

pub mod memory;

use std::cell::Cell;
use std::rc::Rc;

pub use memory::{MemoryDocument, MemoryInput, MemoryPanel};

/// Readable and writable text input
pub trait InputSurface {
    /// Element id of the input
    fn id(&self) -> &str;

    /// Current text value
    fn value(&self) -> String;

    /// Replace the text value (does not raise an input event)
    fn set_value(&self, value: &str);
}

/// Container that shows rendered suggestions
pub trait PanelSurface {
    /// Element id of the panel
    fn id(&self) -> &str;

    /// Replace all children at once
    fn replace_items(&self, items: &[SuggestionItem]);

    /// Show or hide the panel
    fn set_visible(&self, visible: bool);

    /// True if `target` is the panel itself or one of its current children
    fn contains(&self, target: &str) -> bool;
}

/// Resolves element ids to surfaces
pub trait Document {
    fn input(&self, id: &str) -> Option<Rc<dyn InputSurface>>;

    fn panel(&self, id: &str) -> Option<Rc<dyn PanelSurface>>;
}

/// One rendered child of a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// Element id, unique within the page
    pub id: String,
    /// Candidate text, exactly as the backend returned it
    pub text: String,
    /// CSS class name
    pub class: String,
}

impl SuggestionItem {
    /// Joins the panel id and the position in item ids. Element ids that
    /// contain it are refused at attach time, so item ids never collide
    /// with real elements.
    pub const ID_SEPARATOR: char = '#';

    /// Build the item rendered at `index` inside `panel_id`
    pub fn new(panel_id: &str, index: usize, text: &str, class: &str) -> Self {
        Self {
            id: format!("{}{}{}", panel_id, Self::ID_SEPARATOR, index),
            text: text.to_string(),
            class: class.to_string(),
        }
    }
}

/// Pointer-down on some element of the page
#[derive(Debug)]
pub struct PointerEvent {
    target: String,
    default_prevented: Cell<bool>,
}

impl PointerEvent {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Keep focus where it is
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
