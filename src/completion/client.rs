//! Completion client trait.

use async_trait::async_trait;

use crate::core::Model;
use crate::error::CompletionError;

/// Sends a rendered prompt to a model and returns the generated text.
///
/// Implementations classify every failure as transient or fatal and never
/// retry on their own; retry policy belongs to the caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Requests a completion for `prompt` from `model`.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Transient`] for failures that may clear up
    /// (network, timeout, rate limit) and [`CompletionError::Fatal`] for
    /// failures that will not (credentials, rejected request).
    async fn complete(&self, prompt: &str, model: Model) -> Result<String, CompletionError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Requests a completion using a raw model identifier.
///
/// The identifier is validated first, so an unknown model fails with
/// [`CompletionError::Fatal`] without the client ever being called.
///
/// # Errors
///
/// Returns the validation error or whatever the client returns.
pub async fn complete_with_id(
    client: &dyn CompletionClient,
    prompt: &str,
    model_id: &str,
) -> Result<String, CompletionError> {
    let model: Model = model_id.parse()?;
    client.complete(prompt, model).await
}
