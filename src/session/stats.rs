//! Conversation overview figures.

use serde::Serialize;
use std::time::Duration;

use crate::core::{MemoryWindow, Model, Persona};

/// Snapshot of a session's counters and settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Turns recorded since the last reset.
    pub total_messages: usize,
    /// Turns currently visible to the model.
    pub remembered: usize,
    /// Configured memory window.
    pub memory_window: MemoryWindow,
    /// Active persona.
    pub persona: Persona,
    /// Active model.
    pub model: Model,
    /// Whole seconds since the first message, if one has been sent.
    pub duration_secs: Option<u64>,
}

impl SessionStats {
    /// Session duration as "`m` minutes `s` seconds".
    #[must_use]
    pub fn duration_text(&self) -> Option<String> {
        self.duration_secs
            .map(|secs| format_duration(Duration::from_secs(secs)))
    }
}

/// Formats a duration as "`m` minutes `s` seconds".
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{} minutes {} seconds", secs / 60, secs % 60)
}
