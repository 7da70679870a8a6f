//! Scripted suggestion backend
//!
//! Answers from a fixed table and can hold individual requests open until
//! the caller releases them, which is how out-of-order responses are
//! reproduced deterministically.

use super::SuggestionSource;
use crate::error::SuggestError;
use std::cell::RefCell;
use std::collections::HashMap;
use tokio::sync::oneshot;

type Reply = Result<Vec<String>, SuggestError>;

/// In-memory backend with canned and held replies
#[derive(Debug, Default)]
pub struct ScriptedSource {
    replies: RefCell<HashMap<String, Reply>>,
    held: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
    requests: RefCell<Vec<String>>,
}

/// A request held open until it is answered or dropped
#[derive(Debug)]
pub struct HeldRequest {
    tx: oneshot::Sender<Reply>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `prefix` with `candidates`
    pub fn reply(&self, prefix: &str, candidates: &[&str]) {
        let candidates = candidates.iter().map(|c| c.to_string()).collect();
        self.replies
            .borrow_mut()
            .insert(prefix.to_string(), Ok(candidates));
    }

    /// Answer `prefix` with an error
    pub fn fail(&self, prefix: &str, error: SuggestError) {
        self.replies
            .borrow_mut()
            .insert(prefix.to_string(), Err(error));
    }

    /// Hold the next request for `prefix` open until the returned handle answers it
    pub fn hold(&self, prefix: &str) -> HeldRequest {
        let (tx, rx) = oneshot::channel();
        self.held.borrow_mut().insert(prefix.to_string(), rx);
        HeldRequest { tx }
    }

    /// Prefixes requested so far, in issue order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HeldRequest {
    /// Release the request with `candidates`
    pub fn reply(self, candidates: &[&str]) {
        let candidates = candidates.iter().map(|c| c.to_string()).collect();
        // The request may already have been abandoned
        let _ = self.tx.send(Ok(candidates));
    }

    /// Release the request with an error
    pub fn fail(self, error: SuggestError) {
        let _ = self.tx.send(Err(error));
    }
}

impl SuggestionSource for ScriptedSource {
    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SuggestError> {
        self.requests.borrow_mut().push(prefix.to_string());

        let held = self.held.borrow_mut().remove(prefix);
        if let Some(rx) = held {
            return rx
                .await
                .unwrap_or_else(|_| Err(SuggestError::Transport("request dropped".to_string())));
        }

        self.replies
            .borrow()
            .get(prefix)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
