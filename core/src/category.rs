use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::Clue;

/// A titled group of clues, as returned by the category API.
///
/// Extra fields in the API record (ids, clue values, air dates) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RevealState;

    const RECORD: &str = r#"{
        "id": 11496,
        "title": "lit",
        "clues_count": 2,
        "clues": [
            {
                "id": 87593,
                "answer": "Shakespeare",
                "question": "Hamlet Author",
                "value": 200,
                "airdate": "2009-12-31T12:00:00.000Z",
                "category_id": 11496,
                "game_id": null,
                "invalid_count": null
            },
            {
                "id": 87594,
                "answer": null,
                "question": "Bell Jar Author",
                "value": null
            }
        ]
    }"#;

    #[test]
    fn decodes_api_record_ignoring_extra_fields() {
        let category: Category = serde_json::from_str(RECORD).unwrap();

        assert_eq!(category.title, "lit");
        assert_eq!(category.clues.len(), 2);
        assert_eq!(category.clues[0].question, "Hamlet Author");
        assert_eq!(category.clues[0].answer, "Shakespeare");
        assert_eq!(category.clues[0].reveal_state, RevealState::Hidden);
    }

    #[test]
    fn null_answer_decodes_as_empty() {
        let category: Category = serde_json::from_str(RECORD).unwrap();

        assert_eq!(category.clues[1].answer, "");
    }

    #[test]
    fn missing_clues_decode_as_empty_list() {
        let category: Category = serde_json::from_str(r#"{"title": "math"}"#).unwrap();

        assert!(category.clues.is_empty());
    }
}
