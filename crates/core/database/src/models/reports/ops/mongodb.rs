use visaconnect_result::Result;

use crate::MongoDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

static COL: &str = "reports";

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, &report).map(|_| ())
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all reports
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        query!(self, find, COL, doc! {})
    }

    /// Fetch the pending report a user holds against a target, if any
    async fn fetch_pending_report_by_author_and_target(
        &self,
        author_id: &str,
        target_id: &str,
    ) -> Result<Option<Report>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "author_id": author_id,
                "target_id": target_id,
                "status": "pending"
            }
        )
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
