//! Completion clients.
//!
//! The [`CompletionClient`] trait is the seam between a chat session and
//! the remote model. [`OpenAiCompatClient`] talks to any OpenAI-compatible
//! chat completions endpoint; [`ScriptedClient`] replays canned replies
//! for tests and offline runs.

pub mod client;
pub mod config;
pub mod openai;
pub mod scripted;

pub use client::CompletionClient;
pub use config::{API_KEY_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use openai::OpenAiCompatClient;
pub use scripted::{ScriptedClient, ScriptedReply};
