use rocket::serde::json::Json;
use rocket::State;
use visaconnect_database::{
    util::{reference::Reference, review::ReviewRegistry},
    Database, Report, User,
};
use visaconnect_result::{create_error, Result};

/// # Fetch Report
///
/// Fetch a report by its id.
///
/// The report becomes the moderator's current selection; repeated requests
/// for the same report are served from the review session.
#[openapi(tag = "Admin")]
#[get("/<report>")]
pub async fn fetch_report(
    db: &State<Database>,
    registry: &State<ReviewRegistry>,
    user: User,
    report: Reference,
) -> Result<Json<Report>> {
    // Must be privileged for this route
    if !user.privileged {
        return Err(create_error!(NotPrivileged));
    }

    registry
        .session(&user.id)
        .await
        .get_or_fetch(db, &report.id)
        .await
        .map(Json)
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{Header, Status};
    use visaconnect_database::{Database, Report};
    use visaconnect_models::v0::ReportedTarget;

    #[rocket::async_test]
    async fn fetch_report_requires_privilege() {
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
            .get(format!("/api/admin/reports/{}", report.id))
            .header(Header::new("x-session-token", user.token.to_string()))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
    }

    #[rocket::async_test]
    async fn fetch_report_returns_the_report() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(true).await;
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
            .get(format!("/api/admin/reports/{}", report.id))
            .header(Header::new("x-session-token", admin.token.to_string()))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let fetched: Report = response.into_json().await.expect("`Report`");
        assert_eq!(fetched.id, report.id);
        assert_eq!(fetched.author_id, report.author_id);
        assert_eq!(fetched.reason, report.reason);
        assert!(fetched.status.is_pending());
    }

    #[rocket::async_test]
    async fn fetch_report_unknown_id_is_not_found() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(true).await;

        let response = harness
            .client
            .get("/api/admin/reports/missing")
            .header(Header::new("x-session-token", admin.token.to_string()))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn selected_report_is_served_from_the_session() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(true).await;
        let report = harness
            .new_report(
                "alice",
                ReportedTarget::Job {
                    id: "42".to_string(),
                },
            )
            .await;

        // First request selects the report
        let response = harness
            .client
            .get(format!("/api/admin/reports/{}", report.id))
            .header(Header::new("x-session-token", admin.token.to_string()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        // Drop the record; only the session can serve it now
        match &harness.db {
            Database::Reference(reference) => {
                reference.reports.lock().await.remove(&report.id);
            }
            _ => unreachable!(),
        }

        let response = harness
            .client
            .get(format!("/api/admin/reports/{}", report.id))
            .header(Header::new("x-session-token", admin.token.to_string()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let fetched: Report = response.into_json().await.expect("`Report`");
        assert_eq!(fetched.id, report.id);
        assert_eq!(fetched.reason, report.reason);
        assert!(fetched.status.is_pending());
    }
}
