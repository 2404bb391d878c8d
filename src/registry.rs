//! The survey registry: sole owner of all mutable state.
//!
//! One registry is constructed at process start and handed to request
//! handlers as managed state; there are no ambient globals. Mutations take
//! the write lock and are atomic with respect to each other; reads take the
//! read lock and observe either the pre- or post-state of any concurrent
//! mutation, never a partial one.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::aggregate::aggregate;
use crate::error::{Error, Result};
use crate::model::api::{
    desc::{AdminSurveyDescription, SurveyDescription},
    results::SurveyResults,
    spec::{assign_question_ids, SurveySpec},
};
use crate::model::common::{RawAnswers, Response, ResponseId, Survey, SurveyId};
use crate::validate::validate;

/// In-memory survey storage, keyed by survey ID. At most one survey is
/// active per process: the first creation wins and later attempts are
/// rejected until the process is restarted.
pub struct SurveyRegistry {
    surveys: RwLock<HashMap<SurveyId, Survey>>,
}

impl SurveyRegistry {
    pub fn new() -> Self {
        Self {
            surveys: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<SurveyId, Survey>> {
        self.surveys.read().expect("registry lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SurveyId, Survey>> {
        self.surveys.write().expect("registry lock poisoned")
    }

    /// Create the process's survey. Returns the full record; the boundary
    /// decides which parts of it to reveal.
    pub fn create(&self, spec: SurveySpec) -> Result<Survey> {
        spec.check().map_err(Error::BadRequest)?;
        let mut surveys = self.write();
        if let Some(existing) = surveys.keys().next() {
            return Err(Error::AlreadyActive(existing.clone()));
        }
        let SurveySpec {
            title,
            description,
            questions,
            admin_token,
        } = spec;
        let survey = Survey::new(title, description, assign_question_ids(questions), admin_token);
        let created = survey.clone();
        surveys.insert(survey.id.clone(), survey);
        Ok(created)
    }

    /// Replace a survey's title, description and questions wholesale. The
    /// survey's ID, admin token and collected responses are untouched; any
    /// `adminToken` in the payload is ignored.
    pub fn update(&self, survey_id: &str, token: &str, spec: SurveySpec) -> Result<Survey> {
        spec.check().map_err(Error::BadRequest)?;
        let mut surveys = self.write();
        let survey = surveys
            .get_mut(survey_id)
            .ok_or_else(|| Error::NotFound(survey_id.to_string()))?;
        if !survey.admin_token.matches(token) {
            return Err(Error::Unauthorized(survey_id.to_string()));
        }
        let SurveySpec {
            title,
            description,
            questions,
            ..
        } = spec;
        survey.title = title;
        survey.description = description;
        survey.questions = assign_question_ids(questions);
        survey.updated_at = Some(Utc::now());
        Ok(survey.clone())
    }

    /// The respondent-facing view: no secrets, no responses.
    pub fn public_view(&self, survey_id: &str) -> Result<SurveyDescription> {
        let surveys = self.read();
        let survey = surveys
            .get(survey_id)
            .ok_or_else(|| Error::NotFound(survey_id.to_string()))?;
        Ok(SurveyDescription::from(survey))
    }

    /// The full view, for the token holder only.
    pub fn admin_view(&self, survey_id: &str, token: &str) -> Result<AdminSurveyDescription> {
        let surveys = self.read();
        let survey = surveys
            .get(survey_id)
            .ok_or_else(|| Error::NotFound(survey_id.to_string()))?;
        if !survey.admin_token.matches(token) {
            return Err(Error::Unauthorized(survey_id.to_string()));
        }
        Ok(AdminSurveyDescription::from(survey))
    }

    /// Validate and store one response, returning its fresh ID.
    pub fn submit(&self, survey_id: &str, answers: RawAnswers) -> Result<ResponseId> {
        let mut surveys = self.write();
        let survey = surveys
            .get_mut(survey_id)
            .ok_or_else(|| Error::NotFound(survey_id.to_string()))?;
        let violations = validate(survey, &answers);
        if !violations.is_empty() {
            return Err(Error::Validation(violations));
        }
        let response = Response::new(answers);
        let response_id = response.id.clone();
        survey.responses.push(response);
        Ok(response_id)
    }

    /// Aggregate statistics, recomputed from the full store. Results are
    /// public when no token is supplied; a supplied token must still match.
    pub fn results(&self, survey_id: &str, token: Option<&str>) -> Result<SurveyResults> {
        let surveys = self.read();
        let survey = surveys
            .get(survey_id)
            .ok_or_else(|| Error::NotFound(survey_id.to_string()))?;
        if let Some(token) = token {
            if !survey.admin_token.matches(token) {
                return Err(Error::Unauthorized(survey_id.to_string()));
            }
        }
        Ok(aggregate(survey))
    }
}

impl Default for SurveyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::api::spec::QuestionSpec;
    use crate::model::common::Answer;

    fn registry_with_survey() -> (SurveyRegistry, Survey) {
        let registry = SurveyRegistry::new();
        let survey = registry.create(SurveySpec::feedback_example()).unwrap();
        (registry, survey)
    }

    fn valid_answers() -> RawAnswers {
        RawAnswers::from([(
            "q_0".to_string(),
            Some(Answer::One("loved the hike".to_string())),
        )])
    }

    #[test]
    fn create_generates_id_token_and_question_ids() {
        let (_, survey) = registry_with_survey();
        assert_eq!(survey.id.len(), 8);
        assert!(!survey.admin_token.as_str().is_empty());
        assert_eq!(survey.questions[0].id, "q_0");
        assert_eq!(survey.questions[2].id, "format");
        assert!(survey.responses.is_empty());
        assert!(survey.updated_at.is_none());
    }

    #[test]
    fn create_honours_a_supplied_token() {
        let registry = SurveyRegistry::new();
        let mut spec = SurveySpec::feedback_example();
        spec.admin_token = Some("creator-chosen".to_string());
        let survey = registry.create(spec).unwrap();
        assert!(survey.admin_token.matches("creator-chosen"));
    }

    #[test]
    fn second_create_fails_and_echoes_the_existing_id() {
        let (registry, survey) = registry_with_survey();
        match registry.create(SurveySpec::feedback_example()) {
            Err(Error::AlreadyActive(existing)) => assert_eq!(existing, survey.id),
            other => panic!("expected AlreadyActive, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_malformed_specs() {
        let registry = SurveyRegistry::new();
        let mut spec = SurveySpec::feedback_example();
        spec.questions.clear();
        assert!(matches!(registry.create(spec), Err(Error::BadRequest(_))));
        // A rejected create must not count as the active survey.
        assert!(registry.create(SurveySpec::feedback_example()).is_ok());
    }

    #[test]
    fn update_replaces_schema_but_keeps_identity_and_responses() {
        let (registry, survey) = registry_with_survey();
        registry.submit(&survey.id, valid_answers()).unwrap();

        let mut spec = SurveySpec::feedback_example();
        spec.title = "Offsite Feedback (round 2)".to_string();
        spec.questions = vec![QuestionSpec::text_example()];
        spec.admin_token = Some("attempted-rotation".to_string());

        let updated = registry
            .update(&survey.id, survey.admin_token.as_str(), spec)
            .unwrap();
        assert_eq!(updated.id, survey.id);
        assert_eq!(updated.title, "Offsite Feedback (round 2)");
        assert_eq!(updated.questions.len(), 1);
        assert_eq!(updated.responses.len(), 1);
        assert!(updated.updated_at.is_some());
        // The token survives the update attempt.
        assert_eq!(updated.admin_token, survey.admin_token);
    }

    #[test]
    fn update_requires_the_right_token() {
        let (registry, survey) = registry_with_survey();
        let result = registry.update(&survey.id, "wrong", SurveySpec::feedback_example());
        assert!(matches!(result, Err(Error::Unauthorized(_))));

        let result = registry.update("missing", "wrong", SurveySpec::feedback_example());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn submit_rejects_invalid_and_accepts_valid() {
        let (registry, survey) = registry_with_survey();

        match registry.submit(&survey.id, RawAnswers::new()) {
            Err(Error::Validation(violations)) => {
                assert_eq!(violations, vec!["What did you enjoy most? is required"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }

        let response_id = registry.submit(&survey.id, valid_answers()).unwrap();
        assert_eq!(response_id.len(), 16);

        let admin = registry
            .admin_view(&survey.id, survey.admin_token.as_str())
            .unwrap();
        assert_eq!(admin.responses.len(), 1);
        assert_eq!(admin.responses[0].id, response_id);
    }

    #[test]
    fn submit_to_unknown_survey_is_not_found() {
        let (registry, _) = registry_with_survey();
        assert!(matches!(
            registry.submit("missing", valid_answers()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn views_enforce_their_access_rules() {
        let (registry, survey) = registry_with_survey();

        // The public view carries no secret material by construction.
        let public = registry.public_view(&survey.id).unwrap();
        assert_eq!(public.id, survey.id);
        assert!(matches!(
            registry.public_view("missing"),
            Err(Error::NotFound(_))
        ));

        assert!(matches!(
            registry.admin_view(&survey.id, "wrong"),
            Err(Error::Unauthorized(_))
        ));
        let admin = registry
            .admin_view(&survey.id, survey.admin_token.as_str())
            .unwrap();
        assert_eq!(admin.admin_token, survey.admin_token.as_str());
    }

    #[test]
    fn results_are_public_but_a_supplied_token_must_match() {
        let (registry, survey) = registry_with_survey();
        registry.submit(&survey.id, valid_answers()).unwrap();

        let anonymous = registry.results(&survey.id, None).unwrap();
        assert_eq!(anonymous.total_responses, 1);

        let with_token = registry
            .results(&survey.id, Some(survey.admin_token.as_str()))
            .unwrap();
        assert_eq!(anonymous, with_token);

        assert!(matches!(
            registry.results(&survey.id, Some("wrong")),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn results_are_stable_between_submissions() {
        let (registry, survey) = registry_with_survey();
        registry.submit(&survey.id, valid_answers()).unwrap();
        let first = registry.results(&survey.id, None).unwrap();
        let second = registry.results(&survey.id, None).unwrap();
        assert_eq!(first, second);
    }
}
