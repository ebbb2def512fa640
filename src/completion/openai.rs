//! Client for OpenAI-compatible chat completion endpoints.
//!
//! Groq serves the OpenAI wire format, so the `async-openai` client works
//! unchanged once its API base points at Groq.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::{debug, warn};

use super::client::CompletionClient;
use super::config::ClientConfig;
use crate::core::Model;
use crate::error::{self, CompletionError};

/// API error markers that indicate a temporary condition.
const TRANSIENT_MARKERS: &[&str] = &[
    "rate_limit",
    "rate limit",
    "overloaded",
    "server_error",
    "service_unavailable",
    "service unavailable",
    "timeout",
    "timed out",
    "try again",
    "capacity",
    "internal",
    "bad gateway",
    "unavailable",
];

/// Chat completion client for an OpenAI-compatible API.
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl OpenAiCompatClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is missing or the settings
    /// are unusable. No network traffic happens here.
    pub fn new(config: &ClientConfig) -> error::Result<Self> {
        config.validate()?;
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key()?)
            .with_api_base(config.base_url.trim_end_matches('/'));

        // async-openai retries 429s with exponential backoff by default.
        // A zero elapsed-time budget turns that off so rate limits surface
        // as classified errors on the first response.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Ok(Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            timeout: config.timeout,
        })
    }

    async fn request(&self, prompt: &str, model: Model) -> Result<String, CompletionError> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(classify_openai_error)?
            .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(model.id())
            .messages(vec![message])
            .build()
            .map_err(classify_openai_error)?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                CompletionError::transient(format!(
                    "no response within {} seconds",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(classify_openai_error)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CompletionError::transient("model returned an empty completion"))
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatClient {
    async fn complete(&self, prompt: &str, model: Model) -> Result<String, CompletionError> {
        debug!(model = %model, prompt_len = prompt.len(), "requesting completion");
        let result = self.request(prompt, model).await;
        match &result {
            Ok(text) => debug!(model = %model, reply_len = text.len(), "completion received"),
            Err(err) => warn!(model = %model, retryable = err.is_retryable(), error = %err, "completion failed"),
        }
        result
    }

    fn name(&self) -> &'static str {
        "openai-compatible"
    }
}

impl std::fmt::Debug for OpenAiCompatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Maps an `async-openai` error onto the transient/fatal split.
fn classify_openai_error(err: OpenAIError) -> CompletionError {
    match err {
        OpenAIError::Reqwest(e) if e.is_builder() => {
            CompletionError::fatal(format!("invalid request: {e}"))
        }
        OpenAIError::Reqwest(e) => CompletionError::transient(format!("network error: {e}")),
        OpenAIError::ApiError(api) => classify_api_error(api.r#type.as_deref(), &api.message),
        OpenAIError::JSONDeserialize(e) => {
            CompletionError::transient(format!("malformed response: {e}"))
        }
        OpenAIError::InvalidArgument(msg) => CompletionError::fatal(msg),
        other => CompletionError::fatal(other.to_string()),
    }
}

/// Classifies an error body returned by the API.
///
/// Rate limits, overload and server-side faults clear up on their own;
/// everything else (bad key, unknown model, rejected request) does not.
fn classify_api_error(kind: Option<&str>, message: &str) -> CompletionError {
    let kind_lower = kind.unwrap_or_default().to_lowercase();
    let message_lower = message.to_lowercase();
    let transient = TRANSIENT_MARKERS
        .iter()
        .any(|m| kind_lower.contains(m) || message_lower.contains(m));

    let text = kind.map_or_else(|| message.to_string(), |k| format!("{k}: {message}"));
    if transient {
        CompletionError::transient(text)
    } else {
        CompletionError::fatal(text)
    }
}
