use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod create_report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Reports
        create_report::create_report,
    ]
}
