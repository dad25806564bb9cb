use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;
use visaconnect_database::{
    util::{reference::Reference, review::ReviewRegistry},
    Database, Report, User,
};
use visaconnect_result::{create_error, Result};

/// # Decision Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataResolveReport {
    /// Moderator notes to record with the decision
    #[validate(length(min = 0, max = 2000))]
    notes: Option<String>,
}

/// # Resolve Report
///
/// Close a pending report without touching the reported content.
#[openapi(tag = "Admin")]
#[post("/<report>/resolve", data = "<data>")]
pub async fn resolve_report(
    db: &State<Database>,
    registry: &State<ReviewRegistry>,
    user: User,
    report: Reference,
    data: Json<DataResolveReport>,
) -> Result<Json<Report>> {
    // Must be privileged for this route
    if !user.privileged {
        return Err(create_error!(NotPrivileged));
    }

    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut report = report.as_report(db).await?;
    report.resolve(db, data.notes).await?;

    registry.session(&user.id).await.sync(&report).await;
    Ok(Json(report))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};
    use visaconnect_database::Report;
    use visaconnect_models::v0::{ReportStatus, ReportedTarget};

    #[rocket::async_test]
    async fn resolve_report_requires_privilege() {
        let harness = TestHarness::new().await;
        let user = harness.new_user(false).await;
        let report = harness
            .new_report(
                "alice",
                ReportedTarget::Job {
                    id: "42".to_string(),
                },
            )
            .await;

        let response = harness
            .client
            .post(format!("/api/admin/reports/{}/resolve", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-session-token", user.token.to_string()))
            .body(json!({}).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);

        let report = harness.db.fetch_report(&report.id).await.expect("`Report`");
        assert!(report.status.is_pending());
    }

    #[rocket::async_test]
    async fn resolve_report_closes_and_records_notes() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(true).await;
        let author = harness.new_user(false).await;
        let job = harness.new_job(&author.id).await;
        let report = harness
            .new_report(
                "alice",
                ReportedTarget::Job {
                    id: job.id.to_string(),
                },
            )
            .await;

        let response = harness
            .client
            .post(format!("/api/admin/reports/{}/resolve", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-session-token", admin.token.to_string()))
            .body(json!({ "notes": "No violation found" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let report: Report = response.into_json().await.expect("`Report`");
        assert!(matches!(
            report.status,
            ReportStatus::Resolved { closed_at: Some(_) }
        ));
        assert_eq!(report.notes, "No violation found");

        // Resolving never touches the content
        let job = harness.db.fetch_job(&job.id).await.expect("`Job`");
        assert!(!job.hidden);
    }

    #[rocket::async_test]
    async fn resolve_report_rejects_closed_reports() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(true).await;
        let mut report = harness
            .new_report(
                "alice",
                ReportedTarget::Job {
                    id: "42".to_string(),
                },
            )
            .await;
        report.resolve(&harness.db, None).await.unwrap();

        let response = harness
            .client
            .post(format!("/api/admin/reports/{}/resolve", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-session-token", admin.token.to_string()))
            .body(json!({}).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Conflict);
    }
}
