use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, JsonSchema, Debug)]
pub struct RootResponse {
    visaconnect: &'static str,
}

/// # API Root
///
/// Service metadata, used for health checks.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        visaconnect: env!("CARGO_PKG_VERSION"),
    })
}
