//! Windowed conversation memory.
//!
//! The model never sees the whole conversation, only the most recent `k`
//! turns. The window is recomputed from the conversation on every request
//! rather than kept as a separate buffer, so it cannot drift out of sync
//! with what was actually recorded.

use super::turn::Turn;
use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of turns remembered when nothing else is configured.
pub const DEFAULT_MEMORY_WINDOW: usize = 5;

/// Largest window the shell accepts.
pub const MAX_MEMORY_WINDOW: usize = 10;

/// Count of most recent turns included as context for the next completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryWindow(usize);

impl MemoryWindow {
    /// Creates a window of `k` turns.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] if `k` exceeds
    /// [`MAX_MEMORY_WINDOW`].
    pub fn new(k: usize) -> Result<Self, CommandError> {
        if k > MAX_MEMORY_WINDOW {
            return Err(CommandError::InvalidArgument(format!(
                "memory window must be between 0 and {MAX_MEMORY_WINDOW}, got {k}"
            )));
        }
        Ok(Self(k))
    }

    /// Number of turns in the window.
    #[must_use]
    pub const fn size(self) -> usize {
        self.0
    }

    /// Applies this window to `turns`. See [`render`].
    #[must_use]
    pub fn apply(self, turns: &[Turn]) -> &[Turn] {
        render(turns, self.0)
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self(DEFAULT_MEMORY_WINDOW)
    }
}

impl fmt::Display for MemoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the last `min(k, turns.len())` turns, in their original order.
///
/// # Examples
///
/// ```
/// use persona_chat::core::{Turn, render};
///
/// let turns = vec![Turn::new("hi", "hello!"), Turn::new("bye", "goodbye!")];
/// assert_eq!(render(&turns, 1), &[Turn::new("bye", "goodbye!")]);
/// assert!(render(&turns, 0).is_empty());
/// ```
#[must_use]
pub fn render(turns: &[Turn], k: usize) -> &[Turn] {
    &turns[turns.len().saturating_sub(k)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn turns(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| Turn::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn test_render_suffix() {
        let all = turns(4);
        let window = render(&all, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].human(), "q2");
        assert_eq!(window[1].human(), "q3");
    }

    #[test]
    fn test_render_larger_than_conversation() {
        let all = turns(3);
        assert_eq!(render(&all, 10), all.as_slice());
    }

    #[test]
    fn test_render_zero_and_empty() {
        assert!(render(&turns(3), 0).is_empty());
        assert!(render(&[], 5).is_empty());
    }

    #[test]
    fn test_memory_window_bounds() {
        assert_eq!(MemoryWindow::default().size(), DEFAULT_MEMORY_WINDOW);
        assert_eq!(MemoryWindow::new(0).map(MemoryWindow::size), Ok(0));
        assert_eq!(
            MemoryWindow::new(MAX_MEMORY_WINDOW).map(MemoryWindow::size),
            Ok(MAX_MEMORY_WINDOW)
        );
        assert!(matches!(
            MemoryWindow::new(MAX_MEMORY_WINDOW + 1),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_memory_window_apply() {
        let all = turns(6);
        let window = MemoryWindow::new(3).unwrap();
        assert_eq!(window.apply(&all), &all[3..]);
    }

    proptest! {
        #[test]
        fn render_is_order_preserving_suffix(n in 0usize..40, k in 0usize..60) {
            let all = turns(n);
            let window = render(&all, k);
            let expected = k.min(n);
            prop_assert_eq!(window.len(), expected);
            prop_assert_eq!(window, &all[n - expected..]);
        }
    }
}
