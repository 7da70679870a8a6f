//! Page-level wiring of suggestion bindings
//!
//! A `Page` is the listener table for every binding on one page. Input
//! events go to the binding that owns the input, pointer-downs go to the
//! binding whose panel holds the target, and every binding sees every click.
//! Bindings share nothing but the backend handle.

use crate::config::SuggestConfig;
use crate::source::SuggestionSource;
use crate::surface::{Document, PointerEvent};
use crate::widget::{InputOutcome, SuggestionWidget, WidgetOptions};
use std::future::Future;
use std::rc::Rc;

/// All suggestion bindings of one page
pub struct Page<S> {
    source: Rc<S>,
    options: WidgetOptions,
    bindings: Vec<SuggestionWidget<S>>,
}

impl<S: SuggestionSource> Page<S> {
    /// Create an empty page using `source` for every binding
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            options: WidgetOptions::default(),
            bindings: Vec::new(),
        }
    }

    /// Set rendering options for bindings attached afterwards
    pub fn with_options(mut self, options: WidgetOptions) -> Self {
        self.options = options;
        self
    }

    /// Wire every configured binding whose elements exist in `document`
    pub fn from_config(document: &dyn Document, config: &SuggestConfig, source: Rc<S>) -> Self {
        let mut page = Self::new(source).with_options(WidgetOptions::from(&config.render));

        for binding in config.effective_bindings() {
            page.attach(document, &binding.name, &binding.input, &binding.panel);
        }

        tracing::info!(
            "{}: {} binding(s) attached",
            config.engine.name,
            page.len()
        );
        page
    }

    /// Attach a binding; returns false (and does nothing) if an element is missing.
    ///
    /// A binding with the same name is replaced. An input or panel already
    /// owned by another binding is refused, so each input event and each
    /// rendered item belongs to exactly one binding.
    pub fn attach(
        &mut self,
        document: &dyn Document,
        name: &str,
        input_id: &str,
        panel_id: &str,
    ) -> bool {
        if let Some(owner) = self
            .bindings
            .iter()
            .find(|b| b.name() != name && (b.input_id() == input_id || b.panel_id() == panel_id))
        {
            tracing::warn!(
                "{}: {} / {} already bound by '{}', skipping",
                name,
                input_id,
                panel_id,
                owner.name()
            );
            return false;
        }

        let Some(widget) = SuggestionWidget::attach(
            document,
            name,
            input_id,
            panel_id,
            Rc::clone(&self.source),
            self.options.clone(),
        ) else {
            return false;
        };

        self.detach(name);
        self.bindings.push(widget);
        true
    }

    /// Remove a binding by name
    pub fn detach(&mut self, name: &str) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.name() != name);
        before != self.bindings.len()
    }

    pub fn binding(&self, name: &str) -> Option<&SuggestionWidget<S>> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    /// Names of attached bindings, in attach order
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Input event on `target`; `None` if no binding owns that input
    pub fn input(&self, target: &str) -> Option<impl Future<Output = InputOutcome> + '_> {
        self.bindings
            .iter()
            .find(|b| b.input_id() == target)
            .map(|b| b.on_input())
    }

    /// Pointer-down anywhere on the page; true if it selected a suggestion
    pub fn pointer_down(&self, event: &PointerEvent) -> bool {
        self.bindings
            .iter()
            .find(|b| b.owns_item(event.target()))
            .is_some_and(|b| b.on_pointer_down(event))
    }

    /// Click anywhere on the page; returns how many panels were hidden
    pub fn click(&self, target: &str) -> usize {
        self.bindings
            .iter()
            .filter(|b| b.on_page_click(target))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BindingConfig;
    use crate::source::ScriptedSource;
    use crate::surface::{InputSurface, MemoryDocument};

    fn two_pair_document() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_input("home-query-input");
        doc.add_panel("home-suggest-box");
        doc.add_input("result-query-input");
        doc.add_panel("result-suggest-box");
        doc
    }

    #[test]
    fn test_from_default_config() {
        let doc = two_pair_document();
        let page = Page::from_config(
            &doc,
            &SuggestConfig::default(),
            Rc::new(ScriptedSource::new()),
        );

        assert_eq!(page.names(), vec!["home", "result"]);
    }

    #[test]
    fn test_from_config_skips_missing_elements() {
        let mut doc = MemoryDocument::new();
        doc.add_input("home-query-input");
        doc.add_panel("home-suggest-box");
        doc.add_input("result-query-input");

        let page = Page::from_config(
            &doc,
            &SuggestConfig::default(),
            Rc::new(ScriptedSource::new()),
        );

        assert_eq!(page.names(), vec!["home"]);
    }

    #[test]
    fn test_from_config_applies_render_settings() {
        let doc = two_pair_document();
        let mut config = SuggestConfig::default();
        config.render.item_class = "hint".to_string();
        config.bindings = vec![BindingConfig::new(
            "only",
            "result-query-input",
            "result-suggest-box",
        )];

        let page = Page::from_config(&doc, &config, Rc::new(ScriptedSource::new()));
        assert_eq!(page.names(), vec!["only"]);
        assert_eq!(page.options.item_class, "hint");
    }

    #[test]
    fn test_attach_and_detach() {
        let doc = two_pair_document();
        let mut page = Page::new(Rc::new(ScriptedSource::new()));

        assert!(page.attach(&doc, "home", "home-query-input", "home-suggest-box"));
        assert!(!page.attach(&doc, "ghost", "home-query-input", "no-such-box"));
        assert_eq!(page.len(), 1);

        assert!(page.detach("home"));
        assert!(!page.detach("home"));
        assert!(page.is_empty());
    }

    #[test]
    fn test_attach_same_name_replaces() {
        let doc = two_pair_document();
        let mut page = Page::new(Rc::new(ScriptedSource::new()));

        page.attach(&doc, "main", "home-query-input", "home-suggest-box");
        page.attach(&doc, "main", "result-query-input", "result-suggest-box");

        assert_eq!(page.len(), 1);
        assert_eq!(page.binding("main").unwrap().input_id(), "result-query-input");
    }

    #[test]
    fn test_attach_refuses_shared_elements() {
        let mut doc = two_pair_document();
        doc.add_panel("other-box");
        doc.add_input("other-input");
        let mut page = Page::new(Rc::new(ScriptedSource::new()));

        assert!(page.attach(&doc, "a", "home-query-input", "home-suggest-box"));
        assert!(!page.attach(&doc, "b", "home-query-input", "other-box"));
        assert!(!page.attach(&doc, "c", "other-input", "home-suggest-box"));
        assert_eq!(page.names(), vec!["a"]);

        // Re-attaching under the owning name is still a replacement
        assert!(page.attach(&doc, "a", "home-query-input", "other-box"));
        assert_eq!(page.binding("a").unwrap().panel_id(), "other-box");
    }

    #[tokio::test]
    async fn test_input_event_reaches_its_only_binding() {
        let mut doc = MemoryDocument::new();
        let input = doc.add_input("q");
        let box_a = doc.add_panel("box-a");
        let box_b = doc.add_panel("box-b");
        let source = Rc::new(ScriptedSource::new());
        source.reply("ca", &["cat"]);
        let mut page = Page::new(Rc::clone(&source));

        assert!(page.attach(&doc, "a", "q", "box-a"));
        assert!(!page.attach(&doc, "b", "q", "box-b"));

        input.set_value("ca");
        assert_eq!(page.input("q").unwrap().await, InputOutcome::Rendered(1));
        assert!(box_a.is_visible());
        assert!(!box_b.is_visible());
        assert_eq!(source.requests(), vec!["ca"]);
    }

    #[tokio::test]
    async fn test_item_ids_do_not_collide_with_panel_ids() {
        let mut doc = MemoryDocument::new();
        let qa = doc.add_input("qa");
        doc.add_input("qb");
        let box_a = doc.add_panel("box");
        doc.add_panel("box-item-0");
        let source = Rc::new(ScriptedSource::new());
        source.reply("ca", &["cat"]);
        let mut page = Page::new(Rc::clone(&source));
        page.attach(&doc, "a", "qa", "box");
        page.attach(&doc, "b", "qb", "box-item-0");

        qa.set_value("ca");
        page.input("qa").unwrap().await;

        // The other panel element is outside binding a
        assert_eq!(page.click("box-item-0"), 1);
        assert!(!box_a.is_visible());

        page.input("qa").unwrap().await;
        let event = PointerEvent::new(&box_a.items()[0].id);
        assert!(page.pointer_down(&event));
        assert_eq!(qa.value(), "cat");
    }

    #[test]
    fn test_input_on_unbound_element() {
        let doc = two_pair_document();
        let page = Page::from_config(
            &doc,
            &SuggestConfig::default(),
            Rc::new(ScriptedSource::new()),
        );

        assert!(page.input("search-button").is_none());
    }

    #[tokio::test]
    async fn test_events_route_to_owning_binding() {
        let doc = two_pair_document();
        let source = Rc::new(ScriptedSource::new());
        source.reply("ca", &["cat", "car"]);
        let page = Page::from_config(&doc, &SuggestConfig::default(), Rc::clone(&source));

        doc.memory_input("result-query-input").unwrap().set_value("ca");
        let outcome = page.input("result-query-input").unwrap().await;
        assert_eq!(outcome, InputOutcome::Rendered(2));

        let home = doc.memory_panel("home-suggest-box").unwrap();
        let result = doc.memory_panel("result-suggest-box").unwrap();
        assert!(!home.is_visible());
        assert!(result.is_visible());

        let event = PointerEvent::new("result-suggest-box#0");
        assert!(page.pointer_down(&event));
        assert_eq!(doc.memory_input("result-query-input").unwrap().value(), "cat");
        assert_eq!(doc.memory_input("home-query-input").unwrap().value(), "");
    }

    #[tokio::test]
    async fn test_click_reaches_every_binding() {
        let doc = two_pair_document();
        let source = Rc::new(ScriptedSource::new());
        source.reply("a", &["apple"]);
        let page = Page::from_config(&doc, &SuggestConfig::default(), Rc::clone(&source));

        for input in ["home-query-input", "result-query-input"] {
            doc.memory_input(input).unwrap().set_value("a");
            page.input(input).unwrap().await;
        }

        // Inside the home panel, but outside the result binding
        assert_eq!(page.click("home-suggest-box#0"), 1);
        assert!(doc.memory_panel("home-suggest-box").unwrap().is_visible());
        assert!(!doc.memory_panel("result-suggest-box").unwrap().is_visible());

        assert_eq!(page.click("body"), 1);
        assert!(!doc.memory_panel("home-suggest-box").unwrap().is_visible());
    }
}
