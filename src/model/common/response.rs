use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{fresh_id, QuestionId, ResponseId};

/// Length of generated response IDs.
const RESPONSE_ID_LENGTH: usize = 16;

/// A submitted answer value. A closed set like `QuestionKind`: the
/// validator and the aggregator match on it exhaustively. Untagged so that
/// the natural JSON shapes (string, integer, array of strings) deserialize
/// directly; anything else is a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Free text, a single option ID, or a scale value sent as a string.
    One(String),
    /// A scale value sent as a bare number.
    Number(i64),
    /// Multiple option IDs.
    Many(Vec<String>),
}

impl Answer {
    /// An empty answer counts as absent for `required` checks.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::One(text) => text.is_empty(),
            Answer::Number(_) => false,
            Answer::Many(items) => items.is_empty(),
        }
    }

    /// Interpret this answer as an integer, the way scale questions do.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Answer::One(text) => text.trim().parse().ok(),
            Answer::Number(value) => Some(*value),
            Answer::Many(_) => None,
        }
    }

    /// Does this answer select the given option ID? Scalar answers count
    /// as singleton sequences.
    pub fn selects(&self, option_id: &str) -> bool {
        match self {
            Answer::One(id) => id == option_id,
            Answer::Number(_) => false,
            Answer::Many(ids) => ids.iter().any(|id| id == option_id),
        }
    }
}

/// The raw answer map of one submission: question ID to answer. Explicit
/// `null`s are tolerated and treated the same as an absent key.
pub type RawAnswers = HashMap<QuestionId, Option<Answer>>;

/// One respondent's complete answer set. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Response unique ID.
    pub id: ResponseId,
    /// Answers by question ID.
    pub data: HashMap<QuestionId, Answer>,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

impl Response {
    /// Build a fresh response from a validated answer map, dropping
    /// explicit nulls.
    pub fn new(raw: RawAnswers) -> Self {
        let data = raw
            .into_iter()
            .filter_map(|(question_id, answer)| answer.map(|answer| (question_id, answer)))
            .collect();
        Self {
            id: fresh_id(RESPONSE_ID_LENGTH),
            data,
            submitted_at: Utc::now(),
        }
    }
}
