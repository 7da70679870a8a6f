//! In-memory surfaces
//!
//! Plain implementations of the surface traits. They keep the rendered
//! items and the visibility flag as fields, which is all the tests and the
//! CLI need to observe.

use super::{Document, InputSurface, PanelSurface, SuggestionItem};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Text input held in memory
#[derive(Debug)]
pub struct MemoryInput {
    id: String,
    value: RefCell<String>,
}

impl MemoryInput {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: RefCell::new(String::new()),
        }
    }
}

impl InputSurface for MemoryInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

/// Suggestion panel held in memory
#[derive(Debug)]
pub struct MemoryPanel {
    id: String,
    items: RefCell<Vec<SuggestionItem>>,
    visible: Cell<bool>,
}

impl MemoryPanel {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            items: RefCell::new(Vec::new()),
            visible: Cell::new(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Currently rendered children
    pub fn items(&self) -> Vec<SuggestionItem> {
        self.items.borrow().clone()
    }

    /// Text of the currently rendered children, in order
    pub fn texts(&self) -> Vec<String> {
        self.items.borrow().iter().map(|i| i.text.clone()).collect()
    }
}

impl PanelSurface for MemoryPanel {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_items(&self, items: &[SuggestionItem]) {
        *self.items.borrow_mut() = items.to_vec();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn contains(&self, target: &str) -> bool {
        target == self.id || self.items.borrow().iter().any(|i| i.id == target)
    }
}

/// Page made of in-memory surfaces
#[derive(Debug, Default)]
pub struct MemoryDocument {
    inputs: HashMap<String, Rc<MemoryInput>>,
    panels: HashMap<String, Rc<MemoryPanel>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input element and return a handle to it
    pub fn add_input(&mut self, id: &str) -> Rc<MemoryInput> {
        let input = Rc::new(MemoryInput::new(id));
        self.inputs.insert(id.to_string(), Rc::clone(&input));
        input
    }

    /// Add a panel element and return a handle to it
    pub fn add_panel(&mut self, id: &str) -> Rc<MemoryPanel> {
        let panel = Rc::new(MemoryPanel::new(id));
        self.panels.insert(id.to_string(), Rc::clone(&panel));
        panel
    }

    pub fn memory_input(&self, id: &str) -> Option<Rc<MemoryInput>> {
        self.inputs.get(id).cloned()
    }

    pub fn memory_panel(&self, id: &str) -> Option<Rc<MemoryPanel>> {
        self.panels.get(id).cloned()
    }
}

impl Document for MemoryDocument {
    fn input(&self, id: &str) -> Option<Rc<dyn InputSurface>> {
        self.inputs
            .get(id)
            .map(|input| Rc::clone(input) as Rc<dyn InputSurface>)
    }

    fn panel(&self, id: &str) -> Option<Rc<dyn PanelSurface>> {
        self.panels
            .get(id)
            .map(|panel| Rc::clone(panel) as Rc<dyn PanelSurface>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        let input = MemoryInput::new("q");
        assert_eq!(input.value(), "");

        input.set_value("  cat ");
        assert_eq!(input.value(), "  cat ");
        assert_eq!(input.id(), "q");
    }

    #[test]
    fn test_panel_replace_items() {
        let panel = MemoryPanel::new("box");
        panel.replace_items(&[
            SuggestionItem::new("box", 0, "cat", "suggest-item"),
            SuggestionItem::new("box", 1, "car", "suggest-item"),
        ]);
        assert_eq!(panel.texts(), vec!["cat", "car"]);

        panel.replace_items(&[]);
        assert!(panel.items().is_empty());
    }

    #[test]
    fn test_panel_contains() {
        let panel = MemoryPanel::new("box");
        panel.replace_items(&[SuggestionItem::new("box", 0, "cat", "suggest-item")]);

        assert!(panel.contains("box"));
        assert!(panel.contains("box#0"));
        assert!(!panel.contains("box#1"));
        assert!(!panel.contains("body"));
    }

    #[test]
    fn test_panel_starts_hidden() {
        let panel = MemoryPanel::new("box");
        assert!(!panel.is_visible());

        panel.set_visible(true);
        assert!(panel.is_visible());
    }

    #[test]
    fn test_document_lookup() {
        let mut doc = MemoryDocument::new();
        doc.add_input("q");
        doc.add_panel("box");

        assert!(doc.input("q").is_some());
        assert!(doc.panel("box").is_some());
        assert!(doc.input("box").is_none());
        assert!(doc.panel("missing").is_none());
    }

    #[test]
    fn test_document_handles_share_state() {
        let mut doc = MemoryDocument::new();
        let input = doc.add_input("q");

        doc.input("q").unwrap().set_value("dog");
        assert_eq!(input.value(), "dog");
    }
}
