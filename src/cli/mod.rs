//! CLI layer for persona-chat.
//!
//! Provides the command-line interface using clap: an interactive chat
//! shell plus one-shot and inspection commands.

pub mod commands;
pub mod output;
pub mod parser;
pub mod repl;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
pub use repl::run_repl;
