//! Chat session context.
//!
//! A [`Session`] owns everything one user's chat needs: the conversation,
//! the active persona, model and memory window, and the overview counters.
//! Every shell action is a method call on the session, so there is no
//! ambient state and each transition has a defined before and after.
//!
//! A send moves through `Idle -> AwaitingCompletion -> Idle`. On success
//! exactly one turn is appended; on failure the conversation is untouched
//! and the error is handed back to the caller. Because [`Session::send`]
//! borrows the session mutably across the await, a second send cannot start
//! while one is pending.

pub mod command;
pub mod stats;

pub use command::{Command, HELP, Reply};
pub use stats::{SessionStats, format_duration};

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::completion::CompletionClient;
use crate::core::{Conversation, MemoryWindow, Model, Persona, Turn};
use crate::error::{CommandError, Error, Result};
use crate::prompt;

/// User-selectable session configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Prompt persona.
    pub persona: Persona,
    /// Completion model.
    pub model: Model,
    /// Number of recent turns sent as context.
    pub memory: MemoryWindow,
}

impl SessionSettings {
    /// Resolves settings from their textual forms.
    ///
    /// # Errors
    ///
    /// Returns an unknown-persona error, a fatal completion error for an
    /// unsupported model, or an invalid-argument error for an oversized
    /// memory window.
    pub fn parse(persona: &str, model: &str, memory: usize) -> Result<Self> {
        Ok(Self {
            persona: persona.parse()?,
            model: model.parse()?,
            memory: MemoryWindow::new(memory)?,
        })
    }
}

/// State of one user's chat.
#[derive(Debug, Clone, Default)]
pub struct Session {
    conversation: Conversation,
    settings: SessionSettings,
    /// Index of the first turn the model may remember.
    topic_start: usize,
    started_at: Option<Instant>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Every recorded turn, including those before a topic change.
    #[must_use]
    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Turns the model will see on the next send.
    #[must_use]
    pub fn window(&self) -> &[Turn] {
        self.settings
            .memory
            .apply(self.conversation.since(self.topic_start))
    }

    /// Renders the prompt that sending `input` would produce.
    #[must_use]
    pub fn prompt_for(&self, input: &str) -> String {
        prompt::build(self.settings.persona, self.window(), input)
    }

    /// Sends `input` to the model and records the exchange.
    ///
    /// The input is used verbatim: the prompt ends with it and the recorded
    /// turn holds it unchanged. Whitespace only matters for the empty check.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyInput`] for a blank message, without
    /// contacting the model, or the completion error if the call fails. In
    /// both cases the conversation is unchanged.
    pub async fn send(&mut self, client: &dyn CompletionClient, input: &str) -> Result<&Turn> {
        if input.trim().is_empty() {
            return Err(CommandError::EmptyInput.into());
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }

        let prompt = self.prompt_for(input);
        debug!(
            client = client.name(),
            persona = %self.settings.persona,
            model = %self.settings.model,
            context_turns = self.window().len(),
            "awaiting completion"
        );

        match client.complete(&prompt, self.settings.model).await {
            Ok(reply) => {
                self.conversation.append(Turn::new(input, reply));
                info!(turns = self.conversation.len(), "turn recorded");
                self.conversation
                    .last()
                    .ok_or_else(|| Error::InvalidState {
                        message: "turn missing after append".to_string(),
                    })
            }
            Err(err) => {
                warn!(retryable = err.is_retryable(), error = %err, "completion failed; no turn recorded");
                Err(err.into())
            }
        }
    }

    /// Clears all turns, the topic marker and the session clock.
    pub fn reset(&mut self) {
        self.conversation.reset();
        self.topic_start = 0;
        self.started_at = None;
        info!("session reset");
    }

    /// Starts a new topic: the model forgets earlier turns, the history stays.
    pub fn new_topic(&mut self) {
        self.topic_start = self.conversation.len();
        info!(topic_start = self.topic_start, "new topic");
    }

    /// Switches persona.
    ///
    /// # Errors
    ///
    /// Returns an unknown-persona error; the current persona is kept.
    pub fn set_persona(&mut self, name: &str) -> Result<Persona> {
        let persona: Persona = name.parse()?;
        self.settings.persona = persona;
        debug!(%persona, "persona changed");
        Ok(persona)
    }

    /// Switches model.
    ///
    /// # Errors
    ///
    /// Returns a fatal completion error for an unsupported model; the
    /// current model is kept.
    pub fn set_model(&mut self, id: &str) -> Result<Model> {
        let model: Model = id.parse()?;
        self.settings.model = model;
        debug!(%model, "model changed");
        Ok(model)
    }

    /// Changes the memory window size.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for an oversized window.
    pub fn set_memory(&mut self, k: usize) -> Result<MemoryWindow> {
        let memory = MemoryWindow::new(k)?;
        self.settings.memory = memory;
        debug!(%memory, "memory window changed");
        Ok(memory)
    }

    /// Current overview figures.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_messages: self.conversation.len(),
            remembered: self.window().len(),
            memory_window: self.settings.memory,
            persona: self.settings.persona,
            model: self.settings.model,
            duration_secs: self.started_at.map(|t| t.elapsed().as_secs()),
        }
    }

    /// Status line describing the active persona and memory.
    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "Chat powered by Groq AI in {} mode | Remembering the last {} messages",
            self.settings.persona.name().to_lowercase(),
            self.settings.memory
        )
    }

    /// Applies one shell command.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transition returns. A failed command
    /// leaves the session as it was and the session stays usable.
    pub async fn apply(&mut self, command: Command, client: &dyn CompletionClient) -> Result<Reply> {
        match command {
            Command::Send(input) => self.send(client, &input).await.cloned().map(Reply::Turn),
            Command::Reset => {
                self.reset();
                Ok(Reply::Cleared)
            }
            Command::NewTopic => {
                self.new_topic();
                Ok(Reply::TopicStarted)
            }
            Command::SetPersona(name) => self
                .set_persona(&name)
                .map(|p| Reply::Updated(format!("persona set to {p}"))),
            Command::SetModel(id) => self
                .set_model(&id)
                .map(|m| Reply::Updated(format!("model set to {m}"))),
            Command::SetMemory(k) => self
                .set_memory(k)
                .map(|w| Reply::Updated(format!("remembering the last {w} messages"))),
            Command::Stats => Ok(Reply::Stats(self.stats())),
            Command::History => Ok(Reply::History(self.conversation.all().to_vec())),
            Command::Help => Ok(Reply::Help),
            Command::Quit => Ok(Reply::Quit),
        }
    }
}
