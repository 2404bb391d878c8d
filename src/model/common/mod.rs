//! Domain types shared by the validator, aggregator and registry.

mod question;
mod response;
mod survey;
mod token;

pub use question::{ChoiceOption, Question, QuestionKind, MAX_TEXT_ANSWER_CHARS};
pub use response::{Answer, RawAnswers, Response};
pub use survey::Survey;
pub use token::AdminToken;

use rand::{distributions::Alphanumeric, Rng};

/// Survey IDs are short shareable strings.
pub type SurveyId = String;
/// Question IDs are strings, either creator-supplied or assigned by position.
pub type QuestionId = String;
/// Option IDs within a choice question.
pub type OptionId = String;
/// Response IDs are opaque strings.
pub type ResponseId = String;

/// Generate a fresh alphanumeric identifier of the given length. These are
/// handles, not secrets; see [`AdminToken`] for the capability string.
pub fn fresh_id(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
