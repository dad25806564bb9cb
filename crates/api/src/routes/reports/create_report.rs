use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use visaconnect_database::{Database, Report, User};
use visaconnect_models::v0::ReportedTarget;
use visaconnect_result::{create_error, Result};

/// Minimum length of a report reason, after trimming
pub const MIN_REASON_LENGTH: usize = 10;

/// # Report Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataCreateReport {
    /// Content being reported
    #[serde(flatten)]
    content: ReportedTarget,
    /// Reason for the report
    #[validate(custom = "validate_reason")]
    reason: String,
}

fn validate_reason(reason: &str) -> std::result::Result<(), ValidationError> {
    if reason.trim().len() < MIN_REASON_LENGTH {
        return Err(ValidationError::new("reason_too_short"));
    }

    Ok(())
}

/// # Create Report
///
/// Report a job or meetup to the moderation team.
#[openapi(tag = "Reports")]
#[post("/", data = "<data>")]
pub async fn create_report(
    db: &State<Database>,
    user: User,
    data: Json<DataCreateReport>,
) -> Result<Json<Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let config = visaconnect_config::config().await;
    if data.reason.len() > config.features.limits.report_reason {
        return Err(create_error!(FailedValidation {
            error: "reason too long".to_string()
        }));
    }

    // The target must exist before a report can be filed against it
    let target_author = match &data.content {
        ReportedTarget::Job { id } => db.fetch_job(id).await?.author_id,
        ReportedTarget::Meetup { id } => db.fetch_meetup(id).await?.author_id,
    };

    // Users cannot report their own content
    if target_author == user.id {
        return Err(create_error!(CannotReportYourself));
    }

    Report::create(db, user.id, data.content, data.reason)
        .await
        .map(Json)
}
