use visaconnect_result::Result;

use crate::ReferenceDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all reports
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        Ok(reports.values().cloned().collect())
    }

    /// Fetch the pending report a user holds against a target, if any
    async fn fetch_pending_report_by_author_and_target(
        &self,
        author_id: &str,
        target_id: &str,
    ) -> Result<Option<Report>> {
        let reports = self.reports.lock().await;
        Ok(reports
            .values()
            .find(|report| {
                report.author_id == author_id
                    && report.target.id() == target_id
                    && report.status.is_pending()
            })
            .cloned())
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(id) {
            report.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
