//! Error types for persona-chat operations.
//!
//! This module provides the error hierarchy using `thiserror` for prompt
//! rendering, completion calls, shell commands, and configuration.

use thiserror::Error;

/// Result type alias for persona-chat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Prompt-building errors (persona lookup).
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Completion client errors.
    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Shell command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Invalid state errors.
    #[error("invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state.
        message: String,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O errors while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while building a prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Persona name is not one of the known personas.
    #[error("unknown persona: {name}")]
    UnknownPersona {
        /// Name that failed to resolve.
        name: String,
    },
}

/// Errors raised by a completion client.
///
/// The two classes tell callers whether repeating the same request can
/// succeed. Nothing in this crate retries on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Network failure, timeout, rate limit, or upstream overload.
    #[error("transient failure: {message}")]
    Transient {
        /// Description of the failure.
        message: String,
    },

    /// Bad credentials, unknown model, or a rejected request.
    #[error("fatal failure: {message}")]
    Fatal {
        /// Description of the failure.
        message: String,
    },
}

impl CompletionError {
    /// Creates a transient error.
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Creates a fatal error.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Returns `true` if repeating the request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// Shell command errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown slash command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Message was empty or whitespace only.
    #[error("message is empty")]
    EmptyInput,
}

impl Error {
    /// Returns `true` if the error came from a completion that may succeed on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Completion(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidState {
            message: "test".to_string(),
        };
        assert_eq!(err.to_string(), "invalid state: test");

        let err = Error::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: missing key");
    }

    #[test]
    fn test_prompt_error_display() {
        let err = PromptError::UnknownPersona {
            name: "Pirate".to_string(),
        };
        assert_eq!(err.to_string(), "unknown persona: Pirate");

        let err: Error = err.into();
        assert!(err.to_string().contains("prompt error"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_completion_error_classes() {
        let transient = CompletionError::transient("timed out");
        assert!(transient.is_retryable());
        assert!(transient.to_string().contains("timed out"));

        let fatal = CompletionError::fatal("invalid api key");
        assert!(!fatal.is_retryable());
        assert!(fatal.to_string().contains("invalid api key"));
    }

    #[test]
    fn test_error_is_retryable_delegates() {
        let err: Error = CompletionError::transient("rate limit").into();
        assert!(err.is_retryable());

        let err: Error = CompletionError::fatal("bad model").into();
        assert!(!err.is_retryable());

        let err: Error = CommandError::EmptyInput.into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::UnknownCommand("/foo".to_string());
        assert!(err.to_string().contains("unknown command"));

        let err = CommandError::InvalidArgument("memory 99".to_string());
        assert!(err.to_string().contains("invalid argument"));

        let err = CommandError::MissingArgument("persona".to_string());
        assert!(err.to_string().contains("missing required argument"));

        let err = CommandError::EmptyInput;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
