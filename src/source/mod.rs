//! Suggestion backends
//!
//! The widget treats the backend as an opaque asynchronous capability that
//! maps a prefix to an ordered list of candidates. Ranking is entirely the
//! backend's business; the order it returns is the order rendered.

pub mod http;
pub mod scripted;

use crate::error::SuggestError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub use http::{parse_candidates, HttpSuggestionSource};
pub use scripted::{HeldRequest, ScriptedSource};

/// Characters left unescaped in a query component
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Answers prefix queries with ranked candidates
#[allow(async_fn_in_trait)]
pub trait SuggestionSource {
    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SuggestError>;
}

/// Percent-encode a prefix for use as a single query parameter value
pub fn encode_prefix(prefix: &str) -> String {
    utf8_percent_encode(prefix, QUERY_COMPONENT).to_string()
}
