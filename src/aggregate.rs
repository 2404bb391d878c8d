//! On-demand aggregation of a survey's stored responses.

use crate::model::api::results::{OptionCount, QuestionSummary, SurveyResults};
use crate::model::common::{Answer, ChoiceOption, Question, QuestionKind, Response, Survey};

/// Compute per-question statistics over the survey's full response store.
/// Recomputed fresh on every call; nothing is cached or persisted.
pub fn aggregate(survey: &Survey) -> SurveyResults {
    SurveyResults {
        survey_id: survey.id.clone(),
        title: survey.title.clone(),
        total_responses: survey.responses.len(),
        questions: survey
            .questions
            .iter()
            .map(|question| summarize(question, &survey.responses))
            .collect(),
    }
}

/// Summarize one question across all responses, in submission order.
fn summarize(question: &Question, responses: &[Response]) -> QuestionSummary {
    let answers = responses
        .iter()
        .filter_map(|response| response.data.get(&question.id));
    match &question.kind {
        QuestionKind::Text => QuestionSummary::Text {
            question_id: question.id.clone(),
            text: question.text.clone(),
            answers: answers
                .filter_map(|answer| match answer {
                    Answer::One(value) if !value.is_empty() => Some(value.clone()),
                    _ => None,
                })
                .collect(),
        },
        QuestionKind::SingleChoice { options } => QuestionSummary::SingleChoice {
            question_id: question.id.clone(),
            text: question.text.clone(),
            counts: count_options(options, answers),
        },
        QuestionKind::MultipleChoice { options } => QuestionSummary::MultipleChoice {
            question_id: question.id.clone(),
            text: question.text.clone(),
            counts: count_options(options, answers),
        },
        QuestionKind::Scale { .. } => {
            let values: Vec<i64> = answers.filter_map(Answer::as_integer).collect();
            let average = mean(&values);
            QuestionSummary::Scale {
                question_id: question.id.clone(),
                text: question.text.clone(),
                values,
                average,
            }
        }
    }
}

/// Count, for every declared option in declared order, the responses whose
/// answer selects it. Stored option IDs that are no longer declared (a
/// later survey update may have removed them) are ignored.
fn count_options<'a>(
    options: &[ChoiceOption],
    answers: impl Iterator<Item = &'a Answer>,
) -> Vec<OptionCount> {
    let mut counts: Vec<OptionCount> = options
        .iter()
        .map(|option| OptionCount {
            id: option.id.clone(),
            label: option.label.clone(),
            count: 0,
        })
        .collect();
    for answer in answers {
        for entry in counts.iter_mut() {
            if answer.selects(&entry.id) {
                entry.count += 1;
            }
        }
    }
    counts
}

/// Arithmetic mean rounded to two decimal places; `None` for no values.
fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().sum();
    let raw = sum as f64 / values.len() as f64;
    Some((raw * 100.0).round() / 100.0)
}
