//! HTTP suggestion backend

use super::{encode_prefix, SuggestionSource};
use crate::config::EndpointSettings;
use crate::error::SuggestError;
use reqwest::header::ACCEPT;

/// Fetches suggestions with `GET {base_url}{path}?{param}={prefix}`
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: reqwest::Client,
    base_url: String,
    path: String,
    param: String,
}

impl HttpSuggestionSource {
    /// Create a source for `base_url` with default route settings
    pub fn new(base_url: &str) -> Result<Self, SuggestError> {
        let settings = EndpointSettings {
            base_url: base_url.to_string(),
            ..EndpointSettings::default()
        };
        Self::from_settings(&settings)
    }

    /// Create a source from endpoint configuration
    pub fn from_settings(settings: &EndpointSettings) -> Result<Self, SuggestError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            path: settings.path.clone(),
            param: settings.param.clone(),
        })
    }

    /// URL requested for `prefix`
    pub fn request_url(&self, prefix: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url,
            self.path,
            self.param,
            encode_prefix(prefix)
        )
    }
}

impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SuggestError> {
        let url = self.request_url(prefix);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_candidates(&body)
    }
}

/// Decode a response body; `null` counts as an empty list
pub fn parse_candidates(body: &str) -> Result<Vec<String>, SuggestError> {
    let candidates: Option<Vec<String>> = serde_json::from_str(body)?;
    Ok(candidates.unwrap_or_default())
}
