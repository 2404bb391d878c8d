use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{OptionId, QuestionId};

/// Maximum accepted length of a free-text answer, in characters.
pub const MAX_TEXT_ANSWER_CHARS: usize = 5000;

/// One possible answer to a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Option unique ID (within its question).
    pub id: OptionId,
    /// Human-readable label.
    pub label: String,
}

/// A single survey question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question unique ID (within its survey).
    pub id: QuestionId,
    /// Question text.
    pub text: String,
    /// Whether an answer must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Type-specific constraints.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// The type-specific half of a question. A closed set: the validator and
/// the aggregator match on it exhaustively, so a new question type cannot
/// be added without deciding its checking and summary behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free text.
    Text,
    /// One of the declared options.
    SingleChoice { options: Vec<ChoiceOption> },
    /// Any subset of the declared options.
    MultipleChoice { options: Vec<ChoiceOption> },
    /// An integer in the inclusive range.
    #[serde(rename_all = "camelCase")]
    Scale { min_value: i64, max_value: i64 },
}

impl Question {
    /// The set of valid option IDs for this question. Empty for non-choice
    /// questions.
    pub fn option_ids(&self) -> HashSet<&str> {
        match &self.kind {
            QuestionKind::Text | QuestionKind::Scale { .. } => HashSet::new(),
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                options.iter().map(|option| option.id.as_str()).collect()
            }
        }
    }
}
