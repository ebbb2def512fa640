//! Prompt builder.
//!
//! Renders a persona template by substituting the serialized history and
//! the new user input. The builder never truncates: choosing which turns to
//! include is the memory window's job.

use crate::core::persona::{HISTORY_SLOT, INPUT_SLOT};
use crate::core::{Persona, Turn};
use crate::error::PromptError;

/// Label for user lines in the serialized history.
pub const HUMAN_PREFIX: &str = "Human";

/// Label for assistant lines in the serialized history.
pub const AI_PREFIX: &str = "AI";

/// Serializes one turn as a `Human:` line followed by an `AI:` line.
#[must_use]
pub fn serialize_turn(turn: &Turn) -> String {
    format!(
        "{HUMAN_PREFIX}: {}\n{AI_PREFIX}: {}",
        turn.human(),
        turn.assistant()
    )
}

/// Serializes the history, one turn after another, newline separated.
#[must_use]
pub fn serialize_history(history: &[Turn]) -> String {
    history
        .iter()
        .map(serialize_turn)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the prompt for `persona` from the windowed history and new input.
///
/// The output always ends with `input` verbatim.
///
/// # Examples
///
/// ```
/// use persona_chat::core::Persona;
/// use persona_chat::prompt::build;
///
/// let prompt = build(Persona::Default, &[], "2+2?");
/// assert!(prompt.starts_with("You are a friendly and helpful AI assistant"));
/// assert!(prompt.ends_with("2+2?"));
/// ```
#[must_use]
pub fn build(persona: Persona, history: &[Turn], input: &str) -> String {
    fill(persona.template(), &serialize_history(history), input)
}

/// Builds a prompt from a persona name.
///
/// # Errors
///
/// Returns [`PromptError::UnknownPersona`] if `persona` does not name a
/// known persona. Nothing is rendered in that case.
pub fn build_named(persona: &str, history: &[Turn], input: &str) -> Result<String, PromptError> {
    let persona: Persona = persona.parse()?;
    Ok(build(persona, history, input))
}

/// Substitutes both slots in a single left-to-right pass.
///
/// Substituted text is never rescanned, so history or input that happens to
/// contain `{input}` or `{history}` is copied through literally.
fn fill(template: &str, history: &str, input: &str) -> String {
    let mut out = String::with_capacity(template.len() + history.len() + input.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(HISTORY_SLOT) {
            out.push_str(history);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(INPUT_SLOT) {
            out.push_str(input);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_history() {
        let history = vec![Turn::new("hi", "hello!"), Turn::new("bye", "goodbye!")];
        assert_eq!(
            serialize_history(&history),
            "Human: hi\nAI: hello!\nHuman: bye\nAI: goodbye!"
        );
        assert_eq!(serialize_history(&[]), "");
    }

    #[test]
    fn test_build_default_empty_history() {
        let prompt = build(Persona::Default, &[], "2+2?");
        assert!(prompt.contains("You are a friendly and helpful AI assistant"));
        assert!(prompt.contains("Current conversation:\n\nHuman: 2+2?"));
        assert!(prompt.ends_with("2+2?"));
    }

    #[test]
    fn test_build_includes_history_before_input() {
        let history = vec![Turn::new("hi", "hello!")];
        let prompt = build(Persona::Expert, &history, "and then?");
        let history_at = prompt.find("Human: hi\nAI: hello!").unwrap();
        let input_at = prompt.rfind("Human: and then?").unwrap();
        assert!(history_at < input_at);
        assert!(prompt.contains("authoritative expert"));
    }

    #[test]
    fn test_build_does_not_expand_slots_in_user_text() {
        let history = vec![Turn::new("what is {input}?", "a placeholder")];
        let prompt = build(Persona::Creative, &history, "say {history}");
        assert!(prompt.contains("Human: what is {input}?"));
        assert!(prompt.ends_with("say {history}"));
    }

    #[test]
    fn test_build_named_unknown_persona() {
        let result = build_named("Pirate", &[], "ahoy");
        assert_eq!(
            result,
            Err(PromptError::UnknownPersona {
                name: "Pirate".to_string()
            })
        );
    }

    #[test]
    fn test_build_named_matches_build() {
        let history = vec![Turn::new("a", "b")];
        assert_eq!(
            build_named("creative", &history, "c"),
            Ok(build(Persona::Creative, &history, "c"))
        );
    }

    #[test]
    fn test_fill_keeps_unrelated_braces() {
        assert_eq!(fill("{x} {input} }", "h", "i"), "{x} i }");
    }
}
