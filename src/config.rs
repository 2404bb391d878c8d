use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::common::SurveyId;

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// The externally-visible origin of this deployment, without a trailing
    /// slash. Shareable survey links derive from it.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The respondent-facing URL of a survey. This is the string the
    /// QR-code generator encodes.
    pub fn client_url(&self, survey_id: &SurveyId) -> String {
        format!("{}/s/{}", self.base_url(), survey_id)
    }

    /// The admin dashboard URL of a survey. Carries the bearer secret, so
    /// it must only ever be shown to the creator.
    pub fn admin_url(&self, survey_id: &SurveyId, admin_token: &str) -> String {
        format!("{}/s/{}/admin?token={}", self.base_url(), survey_id, admin_token)
    }
}

/// A fairing that loads the application config and puts it in managed state.
/// This could easily be achieved using `AdHoc::config`, but is written out
/// explicitly for control over error messages.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}
