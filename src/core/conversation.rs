//! Session-scoped conversation store.

use super::turn::Turn;
use serde::{Deserialize, Serialize};

/// Ordered record of every completed turn in a session.
///
/// The store only grows, one turn per successful completion, until
/// [`Conversation::reset`] empties it.
///
/// # Examples
///
/// ```
/// use persona_chat::core::{Conversation, Turn};
///
/// let mut conversation = Conversation::new();
/// conversation.append(Turn::new("hi", "hello!"));
/// assert_eq!(conversation.len(), 1);
///
/// conversation.reset();
/// assert!(conversation.all().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Creates an empty conversation.
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Records a completed turn at the end of the conversation.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Removes every recorded turn.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Read-only view of all turns in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns recorded at or after `start`.
    ///
    /// An out-of-range `start` yields an empty slice.
    #[must_use]
    pub fn since(&self, start: usize) -> &[Turn] {
        self.turns.get(start..).unwrap_or_default()
    }

    /// The most recently recorded turn.
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of recorded turns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if no turn has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.append(Turn::new("hi", "hello!"));
        conversation.append(Turn::new("bye", "goodbye!"));
        conversation
    }

    #[test]
    fn test_append_preserves_order() {
        let conversation = sample();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.all()[0].human(), "hi");
        assert_eq!(conversation.all()[1].human(), "bye");
        assert_eq!(conversation.last().map(Turn::human), Some("bye"));
    }

    #[test]
    fn test_reset_empties() {
        let mut conversation = sample();
        conversation.reset();
        assert!(conversation.is_empty());
        assert!(conversation.all().is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn test_since() {
        let conversation = sample();
        assert_eq!(conversation.since(0).len(), 2);
        assert_eq!(conversation.since(1), &[Turn::new("bye", "goodbye!")]);
        assert!(conversation.since(2).is_empty());
        assert!(conversation.since(10).is_empty());
    }
}
