//! Deterministic completion client that replays scripted replies.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::client::CompletionClient;
use crate::core::Model;
use crate::error::CompletionError;

/// One scripted outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Return this completion text.
    Text(String),
    /// Fail with this error.
    Error(CompletionError),
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<ScriptedReply>,
    calls: Vec<(String, Model)>,
}

/// Completion client that answers from a queue of canned replies.
///
/// Every call is recorded along with the prompt it received. Once the
/// queue is exhausted, calls fail with a fatal error.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    script: Mutex<Script>,
}

impl ScriptedClient {
    /// Creates a client with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    #[must_use]
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.with(ScriptedReply::Text(text.into()))
    }

    /// Queues a failure.
    #[must_use]
    pub fn with_error(self, error: CompletionError) -> Self {
        self.with(ScriptedReply::Error(error))
    }

    fn with(mut self, reply: ScriptedReply) -> Self {
        self.script.get_mut().replies.push_back(reply);
        self
    }

    /// Prompts and models received so far, oldest first.
    pub async fn calls(&self) -> Vec<(String, Model)> {
        self.script.lock().await.calls.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.script.lock().await.calls.len()
    }

    /// The most recent prompt, if any.
    pub async fn last_prompt(&self) -> Option<String> {
        self.script
            .lock()
            .await
            .calls
            .last()
            .map(|(prompt, _)| prompt.clone())
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str, model: Model) -> Result<String, CompletionError> {
        let mut script = self.script.lock().await;
        script.calls.push((prompt.to_string(), model));
        match script.replies.pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Error(err)) => Err(err),
            None => Err(CompletionError::fatal("scripted client has no replies left")),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order() {
        let client = ScriptedClient::new()
            .with_reply("first")
            .with_error(CompletionError::transient("flaky"))
            .with_reply("third");

        assert_eq!(client.complete("a", Model::default()).await, Ok("first".into()));
        assert!(
            client
                .complete("b", Model::default())
                .await
                .unwrap_err()
                .is_retryable()
        );
        assert_eq!(client.complete("c", Model::default()).await, Ok("third".into()));
        assert_eq!(client.call_count().await, 3);
        assert_eq!(client.last_prompt().await.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn test_exhausted_script_is_fatal() {
        let client = ScriptedClient::new();
        let err = client.complete("a", Model::default()).await.unwrap_err();
        assert!(!err.is_retryable());
    }
}
