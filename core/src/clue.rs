use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// How much of a clue the player has uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    ShowingQuestion,
    ShowingAnswer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ShowingAnswer)
    }

    /// State after one more click, `ShowingAnswer` stays put.
    pub const fn advance(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => ShowingQuestion,
            ShowingQuestion => ShowingAnswer,
            ShowingAnswer => ShowingAnswer,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// A question/answer pair together with its reveal state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
    #[serde(default)]
    pub reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    /// Text the cell currently shows.
    pub fn display(&self) -> &str {
        use RevealState::*;
        match self.reveal_state {
            Hidden => PLACEHOLDER,
            ShowingQuestion => &self.question,
            ShowingAnswer => &self.answer,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_answer() {
        let mut state = RevealState::default();
        assert!(state.is_hidden());

        state = state.advance();
        assert_eq!(state, RevealState::ShowingQuestion);

        state = state.advance();
        assert_eq!(state, RevealState::ShowingAnswer);
        assert!(state.is_terminal());

        assert_eq!(state.advance(), RevealState::ShowingAnswer);
    }

    #[test]
    fn display_follows_reveal_state() {
        let mut clue = Clue::new("Hamlet Author", "Shakespeare");
        assert_eq!(clue.display(), PLACEHOLDER);

        clue.reveal_state = RevealState::ShowingQuestion;
        assert_eq!(clue.display(), "Hamlet Author");

        clue.reveal_state = RevealState::ShowingAnswer;
        assert_eq!(clue.display(), "Shakespeare");
    }
}
