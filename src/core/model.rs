//! Supported completion models.

use crate::error::CompletionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model identifiers accepted by the completion endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    /// Meta Llama 3, 70B parameters.
    #[default]
    #[serde(rename = "llama3-70b-8192")]
    Llama3_70b,
    /// Google Gemma 2, 9B instruction-tuned.
    #[serde(rename = "gemma2-9b-it")]
    Gemma2_9b,
    /// Mistral Mixtral 8x7B.
    #[serde(rename = "mixtral-8x7b-32768")]
    Mixtral8x7b,
}

impl Model {
    /// Every supported model, in display order.
    pub const ALL: [Self; 3] = [Self::Llama3_70b, Self::Gemma2_9b, Self::Mixtral8x7b];

    /// Identifier sent to the API.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Llama3_70b => "llama3-70b-8192",
            Self::Gemma2_9b => "gemma2-9b-it",
            Self::Mixtral8x7b => "mixtral-8x7b-32768",
        }
    }

    /// Context window in tokens.
    #[must_use]
    pub const fn context_window(self) -> u32 {
        match self {
            Self::Llama3_70b | Self::Gemma2_9b => 8192,
            Self::Mixtral8x7b => 32768,
        }
    }
}

impl FromStr for Model {
    type Err = CompletionError;

    /// Resolves a model identifier.
    ///
    /// Unknown identifiers are a [`CompletionError::Fatal`]: the request
    /// could never succeed, so it is refused before reaching the network.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| CompletionError::fatal(format!("unsupported model: {id}")))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("llama3-70b-8192", Model::Llama3_70b)]
    #[test_case("gemma2-9b-it", Model::Gemma2_9b)]
    #[test_case("mixtral-8x7b-32768", Model::Mixtral8x7b)]
    fn test_parse_known(id: &str, expected: Model) {
        assert_eq!(id.parse::<Model>(), Ok(expected));
    }

    #[test]
    fn test_unknown_model_is_fatal() {
        let err = "gpt-5".parse::<Model>().unwrap_err();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("gpt-5"));
    }

    #[test]
    fn test_serde_uses_api_ids() {
        let json = serde_json::to_string(&Model::Gemma2_9b).unwrap();
        assert_eq!(json, "\"gemma2-9b-it\"");
    }

    #[test]
    fn test_context_window() {
        assert_eq!(Model::Mixtral8x7b.context_window(), 32768);
        assert_eq!(Model::default(), Model::Llama3_70b);
    }
}
