use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::api::{auth::BearerToken, desc::SurveyDescription, results::SurveyResults};
use crate::registry::SurveyRegistry;

pub fn routes() -> Vec<Route> {
    routes![get_survey, get_results]
}

/// The respondent-facing survey description: questions only, no secrets,
/// no responses.
#[get("/surveys/<survey_id>")]
async fn get_survey(
    survey_id: String,
    registry: &State<SurveyRegistry>,
) -> Result<Json<SurveyDescription>> {
    Ok(Json(registry.public_view(&survey_id)?))
}

/// Live results. Shareable without the admin secret; a token, if supplied,
/// must still be correct.
#[get("/surveys/<survey_id>/results")]
async fn get_results(
    survey_id: String,
    token: Option<BearerToken>,
    registry: &State<SurveyRegistry>,
) -> Result<Json<SurveyResults>> {
    let token = token.as_ref().map(BearerToken::as_str);
    Ok(Json(registry.results(&survey_id, token)?))
}
