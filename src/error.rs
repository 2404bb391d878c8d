use rocket::{
    http::Status,
    response::{self, status::Custom, Responder},
    serde::json::{json, Json},
    Request,
};
use thiserror::Error;

use crate::model::common::SurveyId;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong with a registry operation. All of these are
/// the caller's to recover from; none is fatal to the process, and none is
/// swallowed here: the boundary translates each into a transport response.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No survey with ID '{0}'")]
    NotFound(SurveyId),
    #[error("Invalid admin token for survey '{0}'")]
    Unauthorized(SurveyId),
    #[error("A survey is already active: '{0}'")]
    AlreadyActive(SurveyId),
    #[error("Response rejected: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let (status, body) = match &self {
            Self::NotFound(_) => (Status::NotFound, json!({ "error": self.to_string() })),
            Self::Unauthorized(_) => (Status::Forbidden, json!({ "error": self.to_string() })),
            // The existing survey ID is echoed in the body.
            Self::AlreadyActive(id) => (
                Status::Conflict,
                json!({ "error": self.to_string(), "surveyId": id }),
            ),
            // The full flat list, so the client can display every problem
            // at once rather than one per attempt.
            Self::Validation(violations) => (Status::BadRequest, json!({ "errors": violations })),
            Self::BadRequest(_) => (Status::BadRequest, json!({ "error": self.to_string() })),
            Self::Csv(_) => (
                Status::InternalServerError,
                json!({ "error": "internal error" }),
            ),
        };
        Custom(status, Json(body)).respond_to(req)
    }
}
