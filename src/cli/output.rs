//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Model, Persona, Turn};
use crate::error::Error;
use crate::session::{HELP, SessionStats};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats one exchange, labeling the reply with the persona.
#[must_use]
pub fn format_turn(turn: &Turn, persona: Persona, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_turn_text(turn, persona),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TurnOutput<'a> {
                persona: Persona,
                #[serde(flatten)]
                turn: &'a Turn,
            }
            format_json(&TurnOutput { persona, turn })
        }
    }
}

fn format_turn_text(turn: &Turn, persona: Persona) -> String {
    let mut output = String::new();
    output.push_str("You said:\n");
    let _ = writeln!(output, "{}", indent(turn.human()));
    let _ = writeln!(output, "AI Assistant ({persona} mode) replied:");
    let _ = writeln!(output, "{}", indent(turn.assistant()));
    output
}

/// Formats the full conversation.
#[must_use]
pub fn format_history(turns: &[Turn], persona: Persona, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if turns.is_empty() {
                return "No messages yet.\n".to_string();
            }
            turns
                .iter()
                .map(|t| format_turn_text(t, persona))
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => format_json(&turns),
    }
}

/// Formats the conversation overview.
#[must_use]
pub fn format_stats(stats: &SessionStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Conversation Overview\n");
            output.push_str("=====================\n\n");
            let _ = writeln!(output, "  Total messages:  {}", stats.total_messages);
            let _ = writeln!(
                output,
                "  Remembered:      {} of last {}",
                stats.remembered, stats.memory_window
            );
            let _ = writeln!(output, "  Persona:         {}", stats.persona);
            let _ = writeln!(output, "  Model:           {}", stats.model);
            let _ = writeln!(
                output,
                "  Duration:        {}",
                stats
                    .duration_text()
                    .unwrap_or_else(|| "not started".to_string())
            );
            output
        }
        OutputFormat::Json => format_json(stats),
    }
}

/// Formats the persona list.
#[must_use]
pub fn format_personas(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Personas:\n");
            for persona in Persona::ALL {
                let _ = writeln!(
                    output,
                    "  {:<10} {}",
                    persona.name(),
                    persona.description()
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PersonaOutput {
                name: &'static str,
                description: &'static str,
            }
            let personas: Vec<_> = Persona::ALL
                .iter()
                .map(|p| PersonaOutput {
                    name: p.name(),
                    description: p.description(),
                })
                .collect();
            format_json(&personas)
        }
    }
}

/// Formats the model list.
#[must_use]
pub fn format_models(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Models:\n");
            let _ = writeln!(output, "  {:<20} Context", "ID");
            output.push_str(&"-".repeat(36));
            output.push('\n');
            for model in Model::ALL {
                let _ = writeln!(
                    output,
                    "  {:<20} {} tokens",
                    model.id(),
                    model.context_window()
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ModelOutput {
                id: &'static str,
                context_window: u32,
            }
            let models: Vec<_> = Model::ALL
                .iter()
                .map(|m| ModelOutput {
                    id: m.id(),
                    context_window: m.context_window(),
                })
                .collect();
            format_json(&models)
        }
    }
}

/// Formats a rendered prompt.
#[must_use]
pub fn format_prompt(prompt: &str, persona: Persona, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = prompt.to_string();
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PromptOutput<'a> {
                persona: Persona,
                prompt: &'a str,
            }
            format_json(&PromptOutput { persona, prompt })
        }
    }
}

/// Formats the slash-command help.
#[must_use]
pub fn format_help() -> String {
    let mut output = String::from("Commands:\n");
    for (command, summary) in HELP {
        let _ = writeln!(output, "  {command:<18} {summary}");
    }
    output.push_str("Anything else is sent as a message.\n");
    output
}

/// Formats an error for display.
///
/// Text output adds a hint when retrying may help. JSON output carries a
/// `retryable` flag so scripts can decide for themselves.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if error.is_retryable() {
                format!("{error} (temporary problem, try sending again)")
            } else {
                error.to_string()
            }
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                retryable: bool,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
                retryable: error.is_retryable(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Indents every line of `text` by two spaces.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryWindow;
    use crate::error::{CompletionError, PromptError};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_turn_text() {
        let turn = Turn::new("hi", "hello!\nhow are you?");
        let text = format_turn(&turn, Persona::Expert, OutputFormat::Text);
        assert!(text.contains("You said:\n  hi\n"));
        assert!(text.contains("AI Assistant (Expert mode) replied:"));
        assert!(text.contains("  hello!\n  how are you?"));
    }

    #[test]
    fn test_format_turn_json() {
        let turn = Turn::new("hi", "hello!");
        let json = format_turn(&turn, Persona::Default, OutputFormat::Json);
        assert!(json.contains("\"human\": \"hi\""));
        assert!(json.contains("\"assistant\": \"hello!\""));
        assert!(json.contains("\"persona\": \"Default\""));
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(
            format_history(&[], Persona::Default, OutputFormat::Text),
            "No messages yet.\n"
        );
        assert_eq!(format_history(&[], Persona::Default, OutputFormat::Json), "[]");
    }

    #[test]
    fn test_format_stats() {
        let stats = SessionStats {
            total_messages: 4,
            remembered: 2,
            memory_window: MemoryWindow::new(2).unwrap(),
            persona: Persona::Creative,
            model: Model::Gemma2_9b,
            duration_secs: Some(75),
        };

        let text = format_stats(&stats, OutputFormat::Text);
        assert!(text.contains("Total messages:  4"));
        assert!(text.contains("1 minutes 15 seconds"));

        let json = format_stats(&stats, OutputFormat::Json);
        assert!(json.contains("\"total_messages\": 4"));
        assert!(json.contains("\"model\": \"gemma2-9b-it\""));
    }

    #[test]
    fn test_format_personas_and_models() {
        let text = format_personas(OutputFormat::Text);
        for persona in Persona::ALL {
            assert!(text.contains(persona.name()));
        }
        let text = format_models(OutputFormat::Text);
        assert!(text.contains("mixtral-8x7b-32768"));
        let json = format_models(OutputFormat::Json);
        assert!(json.contains("\"context_window\": 8192"));
    }

    #[test]
    fn test_format_error() {
        let err: Error = CompletionError::transient("timed out").into();
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("timed out"));
        assert!(text.contains("try sending again"));
        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("\"retryable\": true"));

        let err: Error = PromptError::UnknownPersona {
            name: "Pirate".to_string(),
        }
        .into();
        let text = format_error(&err, OutputFormat::Text);
        assert!(!text.contains("try sending again"));
        assert!(format_error(&err, OutputFormat::Json).contains("\"retryable\": false"));
    }

    #[test]
    fn test_format_help_lists_commands() {
        let help = format_help();
        assert!(help.contains("/reset"));
        assert!(help.contains("/memory <n>"));
    }
}
