use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Serialize;
use visaconnect_database::{
    util::{reference::Reference, review::ReviewRegistry},
    Database, Job, Meetup, User,
};
use visaconnect_models::v0::ReportedTarget;
use visaconnect_result::{create_error, Result};

/// # Reported Content
#[derive(Serialize, JsonSchema, Debug)]
#[serde(tag = "target_type", rename_all = "lowercase")]
pub enum ReportTargetResponse {
    Job(Job),
    Meetup(Meetup),
}

/// # Fetch Report Target
///
/// Fetch the content a report was filed against.
///
/// The report itself is resolved through the review session; the content is
/// always read live so moderators see its current state.
#[openapi(tag = "Admin")]
#[get("/<report>/target")]
pub async fn fetch_report_target(
    db: &State<Database>,
    registry: &State<ReviewRegistry>,
    user: User,
    report: Reference,
) -> Result<Json<ReportTargetResponse>> {
    // Must be privileged for this route
    if !user.privileged {
        return Err(create_error!(NotPrivileged));
    }

    let report = registry
        .session(&user.id)
        .await
        .get_or_fetch(db, &report.id)
        .await?;

    Ok(Json(match &report.target {
        ReportedTarget::Job { id } => ReportTargetResponse::Job(db.fetch_job(id).await?),
        ReportedTarget::Meetup { id } => ReportTargetResponse::Meetup(db.fetch_meetup(id).await?),
    }))
}
