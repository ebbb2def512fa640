//! A single exchange between the user and the assistant.

use serde::{Deserialize, Serialize};

/// One human message paired with the assistant's reply.
///
/// A turn is only constructed once both sides are known, so the
/// conversation never holds a half-finished exchange. Fields are private
/// to keep recorded turns immutable.
///
/// # Examples
///
/// ```
/// use persona_chat::core::Turn;
///
/// let turn = Turn::new("hi", "hello!");
/// assert_eq!(turn.human(), "hi");
/// assert_eq!(turn.assistant(), "hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    human: String,
    assistant: String,
}

impl Turn {
    /// Creates a turn from the user input and the completion text.
    pub fn new(human: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            assistant: assistant.into(),
        }
    }

    /// The user's message.
    #[must_use]
    pub fn human(&self) -> &str {
        &self.human
    }

    /// The assistant's reply.
    #[must_use]
    pub fn assistant(&self) -> &str {
        &self.assistant
    }
}
