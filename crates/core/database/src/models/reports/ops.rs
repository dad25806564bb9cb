use visaconnect_result::Result;

use crate::{PartialReport, Report};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch all reports
    async fn fetch_reports(&self) -> Result<Vec<Report>>;

    /// Fetch the pending report a user holds against a target, if any
    async fn fetch_pending_report_by_author_and_target(
        &self,
        author_id: &str,
        target_id: &str,
    ) -> Result<Option<Report>>;

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()>;
}
