//! Assistant personas.
//!
//! Each persona is a fixed prompt template that shapes the assistant's tone.
//! The set is closed: names are resolved once at the boundary and unknown
//! names are rejected instead of falling back to [`Persona::Default`].

use crate::error::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slot replaced by the serialized conversation history.
pub const HISTORY_SLOT: &str = "{history}";

/// Slot replaced by the new user input.
pub const INPUT_SLOT: &str = "{input}";

const DEFAULT_TEMPLATE: &str = "You are a friendly and helpful AI assistant, providing clear, concise, and accurate responses.
Focus on being approachable and ensuring the user feels understood and supported.
Current conversation:
{history}
Human: {input}";

const EXPERT_TEMPLATE: &str = "You are a highly knowledgeable and authoritative expert across various fields.
Offer in-depth, precise, and technical explanations, citing examples or relevant research when necessary.
Avoid jargon when possible, but feel free to introduce advanced concepts where appropriate.
Current conversation:
{history}
Human: {input}";

const CREATIVE_TEMPLATE: &str = "You are an imaginative and inventive AI with a flair for creative problem-solving and thinking outside the box.
Use metaphors, vivid descriptions, and unconventional ideas to inspire and captivate the user.
Feel free to suggest unique approaches or surprising solutions to problems.
Current conversation:
{history}
Human: {input}";

/// Named prompt-template variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// Friendly general-purpose assistant.
    #[default]
    Default,
    /// Technical, in-depth explanations.
    Expert,
    /// Imaginative, metaphor-rich answers.
    Creative,
}

impl Persona {
    /// Every persona, in display order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Expert, Self::Creative];

    /// Canonical name of the persona.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Expert => "Expert",
            Self::Creative => "Creative",
        }
    }

    /// The persona's template with [`HISTORY_SLOT`] and [`INPUT_SLOT`] placeholders.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_TEMPLATE,
            Self::Expert => EXPERT_TEMPLATE,
            Self::Creative => CREATIVE_TEMPLATE,
        }
    }

    /// Short description shown in persona listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "friendly, clear and concise answers",
            Self::Expert => "in-depth, precise and technical explanations",
            Self::Creative => "imaginative answers with metaphors and unconventional ideas",
        }
    }

    /// How the assistant is labeled when its replies are shown.
    #[must_use]
    pub const fn speaker(self) -> &'static str {
        match self {
            Self::Default => "AI",
            Self::Expert => "Expert",
            Self::Creative => "Creative AI",
        }
    }
}

impl FromStr for Persona {
    type Err = PromptError;

    /// Resolves a persona name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PromptError::UnknownPersona {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Default", Persona::Default ; "default")]
    #[test_case("expert", Persona::Expert ; "lowercase expert")]
    #[test_case(" CREATIVE ", Persona::Creative ; "padded uppercase creative")]
    fn test_parse_known(input: &str, expected: Persona) {
        assert_eq!(input.parse::<Persona>(), Ok(expected));
    }

    #[test_case("Pirate" ; "unknown name")]
    #[test_case("" ; "empty")]
    #[test_case("Expert2" ; "near miss")]
    fn test_parse_unknown_is_rejected(input: &str) {
        let err = input.parse::<Persona>().unwrap_err();
        assert!(matches!(err, PromptError::UnknownPersona { .. }));
    }

    #[test]
    fn test_templates_have_exactly_two_slots() {
        for persona in Persona::ALL {
            let template = persona.template();
            assert_eq!(template.matches(HISTORY_SLOT).count(), 1, "{persona}");
            assert_eq!(template.matches(INPUT_SLOT).count(), 1, "{persona}");
            assert!(template.ends_with(INPUT_SLOT), "{persona}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(persona.name().parse::<Persona>(), Ok(persona));
            assert_eq!(persona.to_string(), persona.name());
        }
    }
}
