//! Shell commands and their outcomes.
//!
//! A shell line is either a slash command (`/reset`, `/persona Expert`, ...)
//! or a message to send. Each command maps to exactly one state transition
//! on a [`Session`](super::Session).

use std::str::FromStr;

use super::stats::SessionStats;
use crate::core::Turn;
use crate::error::CommandError;

/// A discrete action against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a message to the model.
    Send(String),
    /// Clear all history and statistics.
    Reset,
    /// Forget the model's memory but keep the visible history.
    NewTopic,
    /// Switch persona by name.
    SetPersona(String),
    /// Switch model by identifier.
    SetModel(String),
    /// Change the memory window size.
    SetMemory(usize),
    /// Show session statistics.
    Stats,
    /// Show every recorded turn.
    History,
    /// Show available commands.
    Help,
    /// Leave the shell.
    Quit,
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A turn was recorded.
    Turn(Turn),
    /// History was cleared.
    Cleared,
    /// Memory was cleared; history kept.
    TopicStarted,
    /// A setting changed; the text describes the new value.
    Updated(String),
    /// Current statistics.
    Stats(SessionStats),
    /// All recorded turns.
    History(Vec<Turn>),
    /// Help text requested.
    Help,
    /// Shell should exit.
    Quit,
}

/// One-line summaries of every slash command.
pub const HELP: &[(&str, &str)] = &[
    ("/reset", "clear all chats and start fresh"),
    ("/new", "start a new topic (forget memory, keep history)"),
    ("/persona <name>", "switch persona: Default, Expert, Creative"),
    ("/model <id>", "switch model"),
    ("/memory <n>", "remember the last n turns (0-10)"),
    ("/stats", "show conversation overview"),
    ("/history", "show the full conversation"),
    ("/help", "show this help"),
    ("/quit", "leave the chat"),
];

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(rest) = line.trim().strip_prefix('/') else {
            return Ok(Self::Send(line.to_string()));
        };

        let (name, arg) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(n, a)| (n, a.trim()));

        let required = |what: &str| -> Result<String, CommandError> {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(what.to_string()))
            } else {
                Ok(arg.to_string())
            }
        };

        match name.to_lowercase().as_str() {
            "reset" | "clear" => Ok(Self::Reset),
            "new" | "new-topic" => Ok(Self::NewTopic),
            "persona" => required("persona").map(Self::SetPersona),
            "model" => required("model").map(Self::SetModel),
            "memory" => {
                let value = required("memory")?;
                value
                    .parse()
                    .map(Self::SetMemory)
                    .map_err(|_| CommandError::InvalidArgument(format!("memory {value}")))
            }
            "stats" => Ok(Self::Stats),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::UnknownCommand(format!("/{name}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello there", Command::Send("hello there".into()) ; "plain message")]
    #[test_case("  padded  ", Command::Send("  padded  ".into()) ; "message kept verbatim")]
    #[test_case("  /reset", Command::Reset ; "command with leading space")]
    #[test_case("/reset", Command::Reset ; "reset")]
    #[test_case("/clear", Command::Reset ; "clear alias")]
    #[test_case("/new", Command::NewTopic ; "new topic")]
    #[test_case("/persona Expert", Command::SetPersona("Expert".into()) ; "persona")]
    #[test_case("/model gemma2-9b-it", Command::SetModel("gemma2-9b-it".into()) ; "model")]
    #[test_case("/memory 3", Command::SetMemory(3) ; "memory")]
    #[test_case("/STATS", Command::Stats ; "case insensitive")]
    #[test_case("/history", Command::History ; "history")]
    #[test_case("/help", Command::Help ; "help")]
    #[test_case("/quit", Command::Quit ; "quit")]
    fn test_parse(line: &str, expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "/dance".parse::<Command>(),
            Err(CommandError::UnknownCommand("/dance".into()))
        );
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        assert!(matches!(
            "/persona".parse::<Command>(),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            "/memory lots".parse::<Command>(),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(matches!(
            "/memory -1".parse::<Command>(),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_help_covers_commands() {
        assert!(HELP.iter().any(|(cmd, _)| cmd.starts_with("/reset")));
        assert!(HELP.iter().any(|(cmd, _)| cmd.starts_with("/new")));
    }
}
