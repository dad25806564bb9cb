#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod routes;

use std::str::FromStr;

use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use visaconnect_database::{util::review::ReviewRegistry, DatabaseInfo};

/// Build the Rocket instance serving the moderation API
pub async fn web() -> Rocket<Build> {
    let config = visaconnect_config::config().await;

    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    let cors = rocket_cors::CorsOptions {
        allowed_origins: if config.production {
            AllowedOrigins::some_exact(&[config.hosts.app])
        } else {
            AllowedOrigins::All
        },
        allowed_methods: ["Get", "Post", "Options", "Head"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(rocket)
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../api/openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .manage(db)
        .manage(ReviewRegistry::default())
        .attach(cors)
}
