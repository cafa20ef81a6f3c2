#[macro_use]
extern crate rocket;

use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};
use std::path::Path;

mod behavior;
mod boot;
mod contact;
mod rate_limit;
mod render;
mod routes;
mod sections;
mod site;

#[cfg(test)]
mod tests;

use rate_limit::ContactLimiter;
use site::SiteData;

/// Default site document path. Override with `site_data` in Rocket.toml
/// or the ROCKET_SITE_DATA environment variable.
const SITE_DATA_DEFAULT: &str = "website/site.json";

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Build the Rocket instance around an already-loaded site document.
/// Kept separate from the launch path so tests can drive the full app.
pub fn build(data: SiteData) -> Rocket<Build> {
    rocket::build()
        .manage(data)
        .manage(ContactLimiter::new())
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let site_path: String = figment
        .extract_inner("site_data")
        .unwrap_or_else(|_| SITE_DATA_DEFAULT.to_string());

    boot::run(&site_path);

    let data = SiteData::load_or_default(Path::new(&site_path));
    build(data)
}
