use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use visaconnect_database::{Database, Report, User};
use visaconnect_models::v0::{ReportStatus, ReportStatusString};
use visaconnect_result::{create_error, Result};

/// # Query Parameters
#[derive(Deserialize, JsonSchema, FromForm)]
pub struct OptionsFetchReports {
    /// Find reports against a specific job or meetup
    target_id: Option<String>,

    /// Find reports created by user
    author_id: Option<String>,

    /// Report status to include in search
    status: Option<ReportStatusString>,
}

/// # Fetch Reports
///
/// Fetch all available reports
#[openapi(tag = "Admin")]
#[get("/?<options..>")]
pub async fn fetch_reports(
    db: &State<Database>,
    user: User,
    options: OptionsFetchReports,
) -> Result<Json<Vec<Report>>> {
    // Must be privileged for this route
    if !user.privileged {
        return Err(create_error!(NotPrivileged));
    }

    let mut reports = db.fetch_reports().await?;

    if let Some(target_id) = options.target_id {
        reports.retain(|report| report.target.id() == target_id);
    }

    if let Some(author_id) = options.author_id {
        reports.retain(|report| report.author_id == author_id);
    }

    if let Some(status) = options.status {
        reports.retain(|report| {
            matches!(
                (&status, &report.status),
                (ReportStatusString::Pending, ReportStatus::Pending { .. })
                    | (ReportStatusString::Resolved, ReportStatus::Resolved { .. })
                    | (ReportStatusString::Removed, ReportStatus::Removed { .. })
            )
        });
    }

    Ok(Json(reports))
}
