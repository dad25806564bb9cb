use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod admin;
mod reports;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/api".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/reports" => reports::routes(),
        "/admin/reports" => admin::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::Info;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "VisaConnect Moderation API".to_string(),
            description: Some(
                "Report submission and moderation endpoints for the VisaConnect platform."
                    .to_string(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn openapi_document_includes_error_schema() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/api/openapi.json").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let document: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert!(document["components"]["schemas"]["Error"].is_object());
    }
}
