use rocket::Route;

mod admin;
mod public;
mod responses;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(admin::routes());
    routes.extend(public::routes());
    routes.extend(responses::routes());
    routes
}
