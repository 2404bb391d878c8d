use serde::{Deserialize, Serialize};

use crate::model::common::{OptionId, QuestionId, SurveyId};

/// Live aggregate statistics for one survey. Derived on demand from the
/// full response store, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResults {
    pub survey_id: SurveyId,
    pub title: String,
    pub total_responses: usize,
    /// Per-question summaries, in the survey's question order.
    pub questions: Vec<QuestionSummary>,
}

/// One question's summary; the shape depends on the question type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionSummary {
    #[serde(rename_all = "camelCase")]
    Text {
        question_id: QuestionId,
        text: String,
        /// All non-empty text answers, in submission order.
        answers: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    SingleChoice {
        question_id: QuestionId,
        text: String,
        counts: Vec<OptionCount>,
    },
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        question_id: QuestionId,
        text: String,
        counts: Vec<OptionCount>,
    },
    #[serde(rename_all = "camelCase")]
    Scale {
        question_id: QuestionId,
        text: String,
        /// All integer-parseable answers, in submission order.
        values: Vec<i64>,
        /// Arithmetic mean rounded to two decimals; `null` with no values.
        average: Option<f64>,
    },
}

/// How many responses selected one declared option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCount {
    pub id: OptionId,
    pub label: String,
    pub count: usize,
}
