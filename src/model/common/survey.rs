use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{fresh_id, AdminToken, Question, Response, SurveyId};

/// Length of generated survey IDs.
const SURVEY_ID_LENGTH: usize = 8;

/// A survey: its question schema, collected responses and admin secret.
/// Owned exclusively by the registry; handlers only ever see copies of the
/// appropriate view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// Survey unique ID. Immutable after creation.
    pub id: SurveyId,
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Questions, in display order.
    pub questions: Vec<Question>,
    /// Bearer secret for admin operations. Immutable after creation.
    pub admin_token: AdminToken,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last authorized update, if any.
    pub updated_at: Option<DateTime<Utc>>,
    /// Accepted responses, append-only, in submission order.
    pub responses: Vec<Response>,
}

impl Survey {
    /// Create an empty survey. A missing admin token means we generate one;
    /// a supplied one is stored verbatim.
    pub fn new(
        title: String,
        description: String,
        questions: Vec<Question>,
        admin_token: Option<String>,
    ) -> Self {
        Self {
            id: fresh_id(SURVEY_ID_LENGTH),
            title,
            description,
            questions,
            admin_token: admin_token
                .map(AdminToken::from)
                .unwrap_or_else(AdminToken::generate),
            created_at: Utc::now(),
            updated_at: None,
            responses: Vec::new(),
        }
    }
}
