use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_report;
mod fetch_report_target;
mod fetch_reports;
mod remove_report;
mod resolve_report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Report moderation
        fetch_reports::fetch_reports,
        fetch_report::fetch_report,
        fetch_report_target::fetch_report_target,
        resolve_report::resolve_report,
        remove_report::remove_report,
    ]
}
