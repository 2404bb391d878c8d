#[macro_use]
extern crate log;

#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod registry;
pub mod validate;

pub use config::Config;

use crate::registry::SurveyRegistry;

/// Assemble the server: API routes, application config, request logging,
/// and the in-memory survey registry as managed state.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/api", api::routes())
        .attach(config::ConfigFairing)
        .attach(logging::LoggerFairing)
        .manage(SurveyRegistry::new())
}

#[cfg(test)]
pub(crate) async fn test_client() -> rocket::local::asynchronous::Client {
    rocket::local::asynchronous::Client::tracked(build())
        .await
        .expect("valid rocket instance")
}
