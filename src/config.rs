//! Configuration loading for suggestion bindings
//!
//! Loads endpoint, rendering and binding settings from YAML files.

use crate::error::SuggestError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SuggestConfig {
    /// General settings
    pub engine: EngineSettings,
    /// Suggestion backend endpoint
    pub endpoint: EndpointSettings,
    /// Panel rendering
    pub render: RenderSettings,
    /// Input/panel pairs to wire at startup
    pub bindings: Vec<BindingConfig>,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where and how suggestions are requested
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    /// Scheme, host and port of the backend
    pub base_url: String,
    /// Path of the suggestion route
    pub path: String,
    /// Query parameter carrying the prefix
    pub param: String,
    /// Request timeout in milliseconds (none by default)
    pub timeout_ms: Option<u64>,
    /// User-Agent header
    pub user_agent: String,
}

/// Panel rendering settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// CSS class given to each rendered item
    pub item_class: String,
    /// Cap on rendered items (empty = render everything the backend sends)
    pub max_items: Option<usize>,
}

/// One input/panel pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingConfig {
    pub name: String,
    pub input: String,
    pub panel: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "query-suggest".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            path: "/suggest".to_string(),
            param: "prefix".to_string(),
            timeout_ms: None,
            user_agent: concat!("query-suggest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            item_class: "suggest-item".to_string(),
            max_items: None,
        }
    }
}

impl BindingConfig {
    pub fn new(name: &str, input: &str, panel: &str) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            panel: panel.to_string(),
        }
    }
}

impl EndpointSettings {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl SuggestConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, SuggestError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SuggestError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| SuggestError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from default locations
    pub fn load_default(root: &Path) -> Self {
        let candidates = [
            root.join(".query-suggest.yaml"),
            root.join(".query-suggest.yml"),
            root.join("query-suggest.yaml"),
            root.join("query-suggest.yml"),
        ];

        for candidate in &candidates {
            if candidate.exists() {
                match Self::load(candidate) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", candidate.display(), e),
                }
            }
        }

        Self::default()
    }

    /// Configured bindings, or the home and result pairs when none are given
    pub fn effective_bindings(&self) -> Vec<BindingConfig> {
        if self.bindings.is_empty() {
            vec![
                BindingConfig::new("home", "home-query-input", "home-suggest-box"),
                BindingConfig::new("result", "result-query-input", "result-suggest-box"),
            ]
        } else {
            self.bindings.clone()
        }
    }

    /// Find a binding by name
    pub fn binding(&self, name: &str) -> Option<BindingConfig> {
        self.effective_bindings().into_iter().find(|b| b.name == name)
    }
}
