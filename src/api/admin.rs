use rocket::{http::ContentType, serde::json::Json, Route, State};

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::model::api::{
    auth::BearerToken,
    desc::{AdminSurveyDescription, CreatedSurvey},
    spec::SurveySpec,
};
use crate::registry::SurveyRegistry;

pub fn routes() -> Vec<Route> {
    routes![create_survey, update_survey, admin_view, export_responses]
}

/// Create the survey for this process. The response is the only unsolicited
/// hand-out of the admin token, alongside the shareable URLs.
#[post("/surveys", data = "<spec>", format = "json")]
async fn create_survey(
    spec: Json<SurveySpec>,
    registry: &State<SurveyRegistry>,
    config: &State<Config>,
) -> Result<Json<CreatedSurvey>> {
    let survey = registry.create(spec.into_inner())?;
    Ok(Json(CreatedSurvey::new(&survey, config)))
}

#[put("/surveys/<survey_id>", data = "<spec>", format = "json")]
async fn update_survey(
    survey_id: String,
    token: BearerToken,
    spec: Json<SurveySpec>,
    registry: &State<SurveyRegistry>,
) -> Result<Json<AdminSurveyDescription>> {
    let survey = registry.update(&survey_id, token.as_str(), spec.into_inner())?;
    Ok(Json(AdminSurveyDescription::from(&survey)))
}

#[get("/surveys/<survey_id>/admin")]
async fn admin_view(
    survey_id: String,
    token: BearerToken,
    registry: &State<SurveyRegistry>,
) -> Result<Json<AdminSurveyDescription>> {
    Ok(Json(registry.admin_view(&survey_id, token.as_str())?))
}

/// Export all responses as CSV, for spreadsheet tooling.
#[get("/surveys/<survey_id>/export")]
async fn export_responses(
    survey_id: String,
    token: BearerToken,
    registry: &State<SurveyRegistry>,
) -> Result<(ContentType, String)> {
    let view = registry.admin_view(&survey_id, token.as_str())?;
    Ok((ContentType::CSV, export::responses_csv(&view)?))
}
