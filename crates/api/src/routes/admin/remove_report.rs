use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use visaconnect_database::{
    util::{reference::Reference, review::ReviewRegistry},
    Database, Report, User,
};
use visaconnect_models::v0::ReportedTarget;
use visaconnect_result::{create_error, Error, Result};

/// # Decision Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataRemoveReport {
    /// Moderator notes to record with the decision
    #[validate(length(min = 0, max = 2000))]
    notes: Option<String>,
}

/// # Removal Outcome
#[derive(Serialize, JsonSchema, Debug)]
pub struct RemoveReportResponse {
    /// The closed report
    pub report: Report,
    /// Whether the reported content was hidden
    pub target_hidden: bool,
    /// Why hiding the content failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_error: Option<Error>,
}

/// # Remove Reported Content
///
/// Close a pending report and hide the content it was filed against.
///
/// The status transition and the hide are independent: the report is closed
/// first, and a failure to hide the content is reported in the response
/// rather than rolling the decision back.
#[openapi(tag = "Admin")]
#[post("/<report>/remove", data = "<data>")]
pub async fn remove_report(
    db: &State<Database>,
    registry: &State<ReviewRegistry>,
    user: User,
    report: Reference,
    data: Json<DataRemoveReport>,
) -> Result<Json<RemoveReportResponse>> {
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
    report.remove(db, data.notes).await?;
    registry.session(&user.id).await.sync(&report).await;

    let hidden = match &report.target {
        ReportedTarget::Job { id } => db.hide_job(id).await,
        ReportedTarget::Meetup { id } => db.hide_meetup(id).await,
    };

    let target_error = match hidden {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(
                report = %report.id,
                target = %report.target.id(),
                "failed to hide reported content: {error:?}"
            );
            Some(error)
        }
    };

    Ok(Json(RemoveReportResponse {
        report,
        target_hidden: target_error.is_none(),
        target_error,
    }))
}
