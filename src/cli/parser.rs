//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};

use crate::completion::{
    API_KEY_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::core::{DEFAULT_MEMORY_WINDOW, MAX_MEMORY_WINDOW};
use crate::error::Result;
use crate::session::SessionSettings;
use std::time::Duration;

/// persona-chat: chat with a hosted LLM through a choice of personas.
///
/// Keeps a rolling window of recent turns as context and sends each
/// message to an OpenAI-compatible completion endpoint (Groq by default).
#[derive(Parser, Debug)]
#[command(name = "persona-chat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat.
    ///
    /// Type a message to send it; lines starting with `/` are commands
    /// (try `/help`).
    Chat {
        /// Endpoint settings.
        #[command(flatten)]
        client: ClientArgs,

        /// Initial session settings.
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Send a single message and print the reply.
    Ask {
        /// Message to send.
        input: String,

        /// Endpoint settings.
        #[command(flatten)]
        client: ClientArgs,

        /// Session settings.
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print the prompt a message would produce, without sending it.
    Prompt {
        /// Message to render.
        input: String,

        /// Persona (Default, Expert, Creative).
        #[arg(short, long, default_value = "Default")]
        persona: String,
    },

    /// List available personas.
    Personas,

    /// List supported models.
    Models,
}

/// Connection options for the completion endpoint.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// API key for the completion endpoint.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds to wait for a reply.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Persona, model and memory options.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Model identifier.
    #[arg(short, long, default_value = "llama3-70b-8192")]
    pub model: String,

    /// Persona (Default, Expert, Creative).
    #[arg(short, long, default_value = "Default")]
    pub persona: String,

    /// Number of previous turns to remember.
    #[arg(
        long,
        default_value_t = DEFAULT_MEMORY_WINDOW,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_MEMORY_WINDOW as u64)
    )]
    pub memory: usize,
}

impl ClientArgs {
    /// Builds the client configuration.
    #[must_use]
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl SessionArgs {
    /// Resolves and validates the session settings.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown persona or unsupported model.
    pub fn to_settings(&self) -> Result<SessionSettings> {
        SessionSettings::parse(&self.persona, &self.model, self.memory)
    }
}
