use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::model::common::{Question, Response, Survey, SurveyId};

/// An API-friendly public survey description: no secrets, no responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDescription {
    /// Survey unique ID.
    pub id: SurveyId,
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Questions, in display order.
    pub questions: Vec<Question>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last update, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Survey> for SurveyDescription {
    fn from(survey: &Survey) -> Self {
        Self {
            id: survey.id.clone(),
            title: survey.title.clone(),
            description: survey.description.clone(),
            questions: survey.questions.clone(),
            created_at: survey.created_at,
            updated_at: survey.updated_at,
        }
    }
}

/// The full admin view: the public description plus the collected responses
/// and the admin token itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSurveyDescription {
    #[serde(flatten)]
    pub survey: SurveyDescription,
    /// The bearer secret, echoed back to its holder.
    pub admin_token: String,
    /// All accepted responses, in submission order.
    pub responses: Vec<Response>,
}

impl From<&Survey> for AdminSurveyDescription {
    fn from(survey: &Survey) -> Self {
        Self {
            survey: SurveyDescription::from(survey),
            admin_token: survey.admin_token.as_str().to_string(),
            responses: survey.responses.clone(),
        }
    }
}

/// Returned once, on survey creation: the new survey's handle, its secret,
/// and the shareable URLs derived from the deployment's base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSurvey {
    pub id: SurveyId,
    pub admin_token: String,
    pub client_url: String,
    pub admin_url: String,
}

impl CreatedSurvey {
    pub fn new(survey: &Survey, config: &Config) -> Self {
        Self {
            id: survey.id.clone(),
            admin_token: survey.admin_token.as_str().to_string(),
            client_url: config.client_url(&survey.id),
            admin_url: config.admin_url(&survey.id, survey.admin_token.as_str()),
        }
    }
}
