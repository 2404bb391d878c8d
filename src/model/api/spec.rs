use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::common::{Question, QuestionId, QuestionKind};

/// A survey specification, as submitted by a creator or by an authorized
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySpec {
    /// Survey title.
    pub title: String,
    /// Survey description.
    #[serde(default)]
    pub description: String,
    /// Question specifications, in display order.
    pub questions: Vec<QuestionSpec>,
    /// Optional creator-supplied admin token; one is generated if absent.
    /// Ignored on updates: the token is immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}

/// A question specification: a question whose ID may be left for the
/// system to assign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Optional explicit ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    /// Question text.
    pub text: String,
    /// Whether an answer must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Type-specific constraints.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl SurveySpec {
    /// Structural checks on a creation/update payload, applied before any
    /// state changes. The message is plain; the boundary wraps it.
    pub fn check(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("survey title must not be empty".to_string());
        }
        if self.questions.is_empty() {
            return Err("survey must contain at least one question".to_string());
        }
        let mut question_ids = HashSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            let id = assigned_id(index, question.id.as_deref());
            if !question_ids.insert(id.clone()) {
                return Err(format!("duplicate question ID '{id}'"));
            }
            match &question.kind {
                QuestionKind::Text => {}
                QuestionKind::SingleChoice { options }
                | QuestionKind::MultipleChoice { options } => {
                    let mut option_ids = HashSet::new();
                    for option in options {
                        if !option_ids.insert(option.id.as_str()) {
                            return Err(format!(
                                "duplicate option ID '{}' in question '{id}'",
                                option.id
                            ));
                        }
                    }
                }
                QuestionKind::Scale {
                    min_value,
                    max_value,
                } => {
                    if min_value > max_value {
                        return Err(format!("question '{id}': minValue must not exceed maxValue"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The ID a question ends up with: an explicit non-blank ID is kept, an
/// omitted one is derived from the question's position. Re-submitting an
/// unchanged question order therefore yields the same IDs.
fn assigned_id(index: usize, explicit: Option<&str>) -> QuestionId {
    match explicit {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => format!("q_{index}"),
    }
}

/// Assign IDs to a question list; see [`assigned_id`].
pub fn assign_question_ids(specs: Vec<QuestionSpec>) -> Vec<Question> {
    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let id = assigned_id(index, spec.id.as_deref());
            Question {
                id,
                text: spec.text,
                required: spec.required,
                kind: spec.kind,
            }
        })
        .collect()
}
