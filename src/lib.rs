//! Incremental query suggestions for search inputs
//!
//! As the user types into a query field, the widget asks a suggestion
//! backend for completions of the trimmed prefix and renders them into a
//! dropdown panel. Responses that arrive out of order are filtered by a
//! per-binding generation token, so a slow early request can never
//! overwrite the result of a later one.
//!
//! # Architecture
//!
//! - **Surface**: the input, panel and document contracts the widget drives
//! - **Source**: the backend capability (HTTP, or scripted for tests)
//! - **Widget**: per-binding state machine (`Hidden` / `Shown`)
//! - **Page**: any number of independent bindings and their event routing
//! - **Config**: YAML-based configuration
//!
//! # Example
//!
//! ```no_run
//! use query_suggest::{HttpSuggestionSource, InputSurface, MemoryDocument, Page, SuggestConfig};
//! use std::rc::Rc;
//!
//! # async fn demo() -> Result<(), query_suggest::SuggestError> {
//! let mut document = MemoryDocument::new();
//! let input = document.add_input("home-query-input");
//! let panel = document.add_panel("home-suggest-box");
//!
//! let config = SuggestConfig::default();
//! let source = Rc::new(HttpSuggestionSource::from_settings(&config.endpoint)?);
//! let page = Page::from_config(&document, &config, source);
//!
//! input.set_value("rus");
//! if let Some(pending) = page.input("home-query-input") {
//!     pending.await;
//! }
//! println!("{:?}", panel.texts());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Create a `.query-suggest.yaml` next to the page:
//!
//! ```yaml
//! endpoint:
//!   base_url: http://localhost:8080
//!   path: /suggest
//!
//! bindings:
//!   - name: home
//!     input: home-query-input
//!     panel: home-suggest-box
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod source;
pub mod surface;
pub mod widget;

pub use config::{BindingConfig, SuggestConfig};
pub use error::SuggestError;
pub use page::Page;
pub use source::{encode_prefix, HttpSuggestionSource, ScriptedSource, SuggestionSource};
pub use surface::{
    Document, InputSurface, MemoryDocument, MemoryInput, MemoryPanel, PanelSurface, PointerEvent,
    SuggestionItem,
};
pub use widget::{BindingState, InputOutcome, PanelVisibility, SuggestionWidget, WidgetOptions};
