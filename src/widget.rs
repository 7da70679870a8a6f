//! Suggestion widget for one input/panel binding
//!
//! Each binding owns a generation counter. Every input change advances it
//! before the request is issued, and a response is applied only if its
//! generation is still the current one when it arrives. Responses that lose
//! the race are dropped, so the panel always reflects the most recently
//! issued request rather than the most recently resolved one.
//!
//! All failure paths end in the same place: panel hidden, content cleared.

use crate::config::RenderSettings;
use crate::error::SuggestError;
use crate::source::SuggestionSource;
use crate::surface::{Document, InputSurface, PanelSurface, PointerEvent, SuggestionItem};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Rendering options for a binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    /// CSS class given to each rendered item
    pub item_class: String,
    /// Cap on rendered items
    pub max_items: Option<usize>,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            item_class: "suggest-item".to_string(),
            max_items: None,
        }
    }
}

impl From<&RenderSettings> for WidgetOptions {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            item_class: settings.item_class.clone(),
            max_items: settings.max_items,
        }
    }
}

/// Whether the panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Shown,
}

/// What an input change ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Prefix was empty; no request was issued
    Cleared,
    /// This many candidates were rendered
    Rendered(usize),
    /// Backend answered with no candidates
    NoCandidates,
    /// Request failed; the panel was hidden
    Failed(SuggestError),
    /// A newer request was issued before this one resolved
    Superseded,
}

/// Per-binding state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingState {
    /// Token of the most recently issued request
    pub generation: u64,
    /// Items last rendered into the panel
    pub items: Vec<SuggestionItem>,
    pub visibility: PanelVisibility,
}

impl BindingState {
    /// Text of the rendered items, in order
    pub fn candidates(&self) -> Vec<String> {
        self.items.iter().map(|i| i.text.clone()).collect()
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == PanelVisibility::Shown
    }
}

/// Incremental suggestions for one input/panel pair
pub struct SuggestionWidget<S> {
    name: String,
    input: Rc<dyn InputSurface>,
    panel: Rc<dyn PanelSurface>,
    source: Rc<S>,
    options: WidgetOptions,
    state: RefCell<BindingState>,
}

impl<S: SuggestionSource> SuggestionWidget<S> {
    /// Bind to `input_id` and `panel_id`.
    ///
    /// Returns `None` without side effects if either element is missing
    /// from the document; pages may legitimately omit a panel. Ids holding
    /// the item id separator are refused the same way.
    pub fn attach(
        document: &dyn Document,
        name: &str,
        input_id: &str,
        panel_id: &str,
        source: Rc<S>,
        options: WidgetOptions,
    ) -> Option<Self> {
        if [input_id, panel_id]
            .iter()
            .any(|id| id.contains(SuggestionItem::ID_SEPARATOR))
        {
            tracing::warn!(
                "{}: element ids may not contain '{}', skipping",
                name,
                SuggestionItem::ID_SEPARATOR
            );
            return None;
        }
        let Some(input) = document.input(input_id) else {
            tracing::debug!("{}: no input '{}', skipping", name, input_id);
            return None;
        };
        let Some(panel) = document.panel(panel_id) else {
            tracing::debug!("{}: no panel '{}', skipping", name, panel_id);
            return None;
        };

        panel.set_visible(false);
        tracing::debug!("{}: attached {} -> {}", name, input_id, panel_id);

        Some(Self {
            name: name.to_string(),
            input,
            panel,
            source,
            options,
            state: RefCell::new(BindingState::default()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_id(&self) -> &str {
        self.input.id()
    }

    pub fn panel_id(&self) -> &str {
        self.panel.id()
    }

    /// Snapshot of the binding state
    pub fn state(&self) -> BindingState {
        self.state.borrow().clone()
    }

    /// True if `target` is one of this binding's rendered items
    pub fn owns_item(&self, target: &str) -> bool {
        self.state.borrow().items.iter().any(|i| i.id == target)
    }

    /// React to a change of the input value.
    ///
    /// The prefix is read and the generation advanced immediately; the
    /// returned future performs the request and applies its result if no
    /// newer input arrived in the meantime.
    pub fn on_input(&self) -> impl Future<Output = InputOutcome> + '_ {
        let prefix = self.input.value().trim().to_string();
        let generation = self.advance();

        let pending = if prefix.is_empty() {
            self.clear();
            None
        } else {
            Some(prefix)
        };

        async move {
            let Some(prefix) = pending else {
                return InputOutcome::Cleared;
            };

            tracing::debug!("{}: request #{} for '{}'", self.name, generation, prefix);
            let result = self.source.suggest(&prefix).await;

            if !self.is_current(generation) {
                tracing::debug!("{}: dropping stale response #{}", self.name, generation);
                return InputOutcome::Superseded;
            }

            match result {
                Ok(mut candidates) => {
                    if let Some(max) = self.options.max_items {
                        candidates.truncate(max);
                    }
                    if candidates.is_empty() {
                        self.clear();
                        InputOutcome::NoCandidates
                    } else {
                        InputOutcome::Rendered(self.render(&candidates))
                    }
                }
                Err(e) => {
                    tracing::debug!("{}: request #{} failed: {}", self.name, generation, e);
                    self.clear();
                    InputOutcome::Failed(e)
                }
            }
        }
    }

    /// Commit the item under a pointer-down.
    ///
    /// Runs before the input loses focus, so the selection lands before any
    /// blur-driven dismissal. Returns false if the target is not one of the
    /// rendered items.
    pub fn on_pointer_down(&self, event: &PointerEvent) -> bool {
        let text = {
            let state = self.state.borrow();
            let item = state.items.iter().find(|i| i.id == event.target());
            match item {
                Some(item) if state.is_shown() => item.text.clone(),
                _ => return false,
            }
        };

        event.prevent_default();
        self.input.set_value(&text);
        self.hide();
        // A response still in flight must not reopen the panel
        self.advance();

        tracing::debug!("{}: selected '{}'", self.name, text);
        true
    }

    /// Hide the panel if `target` lies outside the input and the panel.
    ///
    /// Returns true if a shown panel was hidden.
    pub fn on_page_click(&self, target: &str) -> bool {
        if target == self.input.id() || self.panel.contains(target) {
            return false;
        }

        let was_shown = self.state.borrow().is_shown();
        self.hide();
        was_shown
    }

    fn advance(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state.borrow().generation == generation
    }

    fn render(&self, candidates: &[String]) -> usize {
        let items: Vec<_> = candidates
            .iter()
            .enumerate()
            .map(|(i, text)| SuggestionItem::new(self.panel.id(), i, text, &self.options.item_class))
            .collect();

        self.panel.replace_items(&items);
        self.panel.set_visible(true);

        let mut state = self.state.borrow_mut();
        state.items = items;
        state.visibility = PanelVisibility::Shown;
        state.items.len()
    }

    fn hide(&self) {
        self.panel.set_visible(false);
        self.state.borrow_mut().visibility = PanelVisibility::Hidden;
    }

    fn clear(&self) {
        self.panel.replace_items(&[]);
        self.hide();
        self.state.borrow_mut().items.clear();
    }
}
