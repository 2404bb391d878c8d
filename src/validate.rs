//! Response validation against a survey's question schema.

use crate::model::common::{
    Answer, Question, QuestionKind, RawAnswers, Survey, MAX_TEXT_ANSWER_CHARS,
};

/// Check a submitted answer set against the survey's schema, in schema
/// order. Returns one human-readable violation per failed check; an empty
/// list means the response is acceptable. Pure and total: no side effects,
/// and no failure mode for a well-formed survey.
pub fn validate(survey: &Survey, answers: &RawAnswers) -> Vec<String> {
    let mut violations = Vec::new();
    for question in &survey.questions {
        let answer = answers.get(&question.id).and_then(Option::as_ref);
        match answer {
            Some(value) if !value.is_empty() => {
                if let Some(violation) = check_answer(question, value) {
                    violations.push(violation);
                }
            }
            // Absent, null or empty: only `required` can complain, and no
            // other check runs for the question.
            _ => {
                if question.required {
                    violations.push(format!("{} is required", question.text));
                }
            }
        }
    }
    violations
}

/// Type-specific check of one present, non-empty answer.
fn check_answer(question: &Question, answer: &Answer) -> Option<String> {
    match &question.kind {
        QuestionKind::Text => check_text(question, answer),
        // Cardinality is deliberately not enforced: a single-choice
        // question accepts a sequence answer.
        QuestionKind::SingleChoice { .. } | QuestionKind::MultipleChoice { .. } => {
            check_choice(question, answer)
        }
        QuestionKind::Scale {
            min_value,
            max_value,
        } => check_scale(question, *min_value, *max_value, answer),
    }
}

fn check_text(question: &Question, answer: &Answer) -> Option<String> {
    match answer {
        Answer::One(text) => (text.chars().count() > MAX_TEXT_ANSWER_CHARS).then(|| {
            format!(
                "{} must be at most {MAX_TEXT_ANSWER_CHARS} characters",
                question.text
            )
        }),
        Answer::Number(_) | Answer::Many(_) => {
            Some(format!("{} must be a text answer", question.text))
        }
    }
}

fn check_choice(question: &Question, answer: &Answer) -> Option<String> {
    let valid = question.option_ids();
    let ok = match answer {
        Answer::One(id) => valid.contains(id.as_str()),
        Answer::Many(ids) => ids.iter().all(|id| valid.contains(id.as_str())),
        Answer::Number(_) => false,
    };
    (!ok).then(|| format!("{} has an invalid option selected", question.text))
}

fn check_scale(question: &Question, min_value: i64, max_value: i64, answer: &Answer) -> Option<String> {
    match answer.as_integer() {
        Some(value) if (min_value..=max_value).contains(&value) => None,
        _ => Some(format!(
            "{} must be a number between {min_value} and {max_value}",
            question.text
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::api::spec::{assign_question_ids, SurveySpec};

    fn survey() -> Survey {
        let spec = SurveySpec::feedback_example();
        Survey::new(
            spec.title,
            spec.description,
            assign_question_ids(spec.questions),
            None,
        )
    }

    fn one(value: &str) -> Option<Answer> {
        Some(Answer::One(value.to_string()))
    }

    fn many(values: &[&str]) -> Option<Answer> {
        Some(Answer::Many(values.iter().map(|v| v.to_string()).collect()))
    }

    /// The example survey's IDs: `q_0` text (required), `q_1` scale 1..=5,
    /// `format` single choice, `activities` multiple choice.
    fn answers(entries: &[(&str, Option<Answer>)]) -> RawAnswers {
        entries
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.clone()))
            .collect()
    }

    #[test]
    fn satisfying_answers_produce_no_violations() {
        let violations = validate(
            &survey(),
            &answers(&[
                ("q_0", one("The hike was great")),
                ("q_1", one("4")),
                ("format", one("onsite")),
                ("activities", many(&["hike", "quiz"])),
            ]),
        );
        assert_eq!(violations, Vec::<String>::new());
    }

    #[test]
    fn missing_required_answer_is_the_only_violation() {
        let violations = validate(&survey(), &answers(&[]));
        assert_eq!(violations, vec!["What did you enjoy most? is required"]);
    }

    #[test]
    fn empty_string_and_null_count_as_absent() {
        for absent in [one(""), None] {
            let violations = validate(&survey(), &answers(&[("q_0", absent)]));
            assert_eq!(violations.len(), 1);
            assert!(violations[0].contains("is required"));
        }
    }

    #[test]
    fn required_violation_suppresses_further_checks() {
        // An empty sequence for a required question must yield exactly the
        // required violation, not a choice violation as well.
        let mut survey = survey();
        survey.questions[3].required = true;
        let violations = validate(&survey, &answers(&[("q_0", one("hi")), ("activities", many(&[]))]));
        assert_eq!(
            violations,
            vec!["Which activities should we repeat? is required"]
        );
    }

    #[test]
    fn scale_bounds_are_inclusive() {
        for accepted in ["1", "5"] {
            let violations = validate(&survey(), &answers(&[("q_0", one("x")), ("q_1", one(accepted))]));
            assert_eq!(violations, Vec::<String>::new());
        }
        for rejected in ["0", "6", "four"] {
            let violations = validate(&survey(), &answers(&[("q_0", one("x")), ("q_1", one(rejected))]));
            assert_eq!(violations, vec!["Rate the venue must be a number between 1 and 5"]);
        }
    }

    #[test]
    fn scale_accepts_bare_numbers() {
        let violations = validate(
            &survey(),
            &answers(&[("q_0", one("x")), ("q_1", Some(Answer::Number(3)))]),
        );
        assert_eq!(violations, Vec::<String>::new());
    }

    #[test]
    fn undeclared_option_is_rejected_at_any_cardinality() {
        let scalar = validate(&survey(), &answers(&[("q_0", one("x")), ("format", one("hybrid"))]));
        assert_eq!(scalar, vec!["Preferred format next time has an invalid option selected"]);

        let sequence = validate(
            &survey(),
            &answers(&[("q_0", one("x")), ("activities", many(&["hike", "karaoke"]))]),
        );
        assert_eq!(
            sequence,
            vec!["Which activities should we repeat? has an invalid option selected"]
        );
    }

    #[test]
    fn single_choice_accepts_a_sequence_answer() {
        // Cardinality is not restricted, only option validity.
        let violations = validate(
            &survey(),
            &answers(&[("q_0", one("x")), ("format", many(&["onsite", "remote"]))]),
        );
        assert_eq!(violations, Vec::<String>::new());
    }

    #[test]
    fn text_answers_must_be_strings_and_bounded() {
        let not_text = validate(&survey(), &answers(&[("q_0", Some(Answer::Number(7)))]));
        assert_eq!(not_text, vec!["What did you enjoy most? must be a text answer"]);

        let long = "x".repeat(MAX_TEXT_ANSWER_CHARS + 1);
        let too_long = validate(&survey(), &answers(&[("q_0", one(&long))]));
        assert_eq!(
            too_long,
            vec!["What did you enjoy most? must be at most 5000 characters"]
        );

        let at_limit = "x".repeat(MAX_TEXT_ANSWER_CHARS);
        assert_eq!(
            validate(&survey(), &answers(&[("q_0", one(&at_limit))])),
            Vec::<String>::new()
        );
    }

    #[test]
    fn all_violations_are_reported_together() {
        let violations = validate(
            &survey(),
            &answers(&[("q_1", one("99")), ("format", one("hybrid"))]),
        );
        assert_eq!(violations.len(), 3);
        assert!(violations[0].contains("is required"));
        assert!(violations[1].contains("between 1 and 5"));
        assert!(violations[2].contains("invalid option"));
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let violations = validate(
            &survey(),
            &answers(&[("q_0", one("x")), ("mystery", one("whatever"))]),
        );
        assert_eq!(violations, Vec::<String>::new());
    }
}
