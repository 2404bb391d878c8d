use rocket::{serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::common::{RawAnswers, ResponseId};
use crate::registry::SurveyRegistry;

pub fn routes() -> Vec<Route> {
    routes![submit_response]
}

/// Receipt for an accepted response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub success: bool,
    pub response_id: ResponseId,
}

#[post("/surveys/<survey_id>/responses", data = "<answers>", format = "json")]
async fn submit_response(
    survey_id: String,
    answers: Json<RawAnswers>,
    registry: &State<SurveyRegistry>,
) -> Result<Json<SubmitReceipt>> {
    let response_id = registry.submit(&survey_id, answers.into_inner())?;
    Ok(Json(SubmitReceipt {
        success: true,
        response_id,
    }))
}
