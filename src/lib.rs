//! # persona-chat
//!
//! Persona-driven chat client for hosted LLM completion APIs.
//!
//! Each message is sent together with a rolling window of the most recent
//! turns, wrapped in the template of the selected persona. The remote model
//! is reached through the [`CompletionClient`] trait, which reports every
//! failure as either transient or fatal.
//!
//! ## Features
//!
//! - **Windowed memory**: only the last `k` turns are sent as context
//! - **Personas**: Default, Expert and Creative prompt templates
//! - **Explicit sessions**: all chat state lives in a [`Session`] value
//! - **Typed failures**: retryable and non-retryable errors are distinct

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod completion;
pub mod core;
pub mod error;
pub mod prompt;
pub mod session;

// Re-export commonly used types at crate root
pub use error::{CommandError, CompletionError, Error, PromptError, Result};

// Re-export core domain types
pub use self::core::{Conversation, MemoryWindow, Model, Persona, Turn, render};

// Re-export completion types
pub use completion::{ClientConfig, CompletionClient, OpenAiCompatClient, ScriptedClient};

// Re-export session types
pub use session::{Command, Reply, Session, SessionSettings, SessionStats};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
