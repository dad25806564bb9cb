use iso8601_timestamp::Timestamp;
use ulid::Ulid;
use visaconnect_models::v0::{ReportStatus, ReportedTarget};
use visaconnect_result::Result;

use crate::Database;

auto_derived!(
    /// User-submitted report against a job or meetup
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who filed this report
        pub author_id: String,
        /// Reported content
        #[serde(flatten)]
        pub target: ReportedTarget,
        /// Reason given by the reporter
        pub reason: String,
        /// Status of the report
        #[serde(flatten)]
        pub status: ReportStatus,
        /// Notes recorded by the moderator at decision time
        #[serde(default)]
        pub notes: String,
        /// When this report was filed
        #[cfg_attr(feature = "schemas", schemars(with = "String"))]
        pub created_at: Timestamp,
        /// Bumped on every status transition
        #[cfg_attr(feature = "schemas", schemars(with = "String"))]
        pub updated_at: Timestamp,
    }

    /// Partial report applied during moderation
    #[derive(Default)]
    pub struct PartialReport {
        /// New status of the report
        #[serde(flatten)]
        pub status: Option<ReportStatus>,
        /// Moderator notes
        #[serde(skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,
        #[cfg_attr(feature = "schemas", schemars(with = "Option<String>"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

impl Report {
    /// Create a new report against a job or meetup.
    ///
    /// A reporter may only hold one pending report per target.
    pub async fn create(
        db: &Database,
        author_id: String,
        target: ReportedTarget,
        reason: String,
    ) -> Result<Report> {
        if db
            .fetch_pending_report_by_author_and_target(&author_id, target.id())
            .await?
            .is_some()
        {
            return Err(create_error!(AlreadyReported));
        }

        let now = Timestamp::now_utc();
        let report = Report {
            id: Ulid::new().to_string(),
            author_id,
            target,
            reason,
            status: ReportStatus::Pending {},
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Close this report without touching the reported content
    pub async fn resolve(&mut self, db: &Database, notes: Option<String>) -> Result<()> {
        self.moderate(
            db,
            ReportStatus::Resolved {
                closed_at: Some(Timestamp::now_utc()),
            },
            notes,
        )
        .await
    }

    /// Close this report, marking the reported content for removal.
    ///
    /// Hiding the content itself is the caller's responsibility; the status
    /// transition and the hide are independent operations.
    pub async fn remove(&mut self, db: &Database, notes: Option<String>) -> Result<()> {
        self.moderate(
            db,
            ReportStatus::Removed {
                closed_at: Some(Timestamp::now_utc()),
            },
            notes,
        )
        .await
    }

    /// Apply a moderation decision to this report.
    ///
    /// Only a pending report can transition, and only into a terminal state;
    /// anything else is rejected without touching the record.
    pub async fn moderate(
        &mut self,
        db: &Database,
        status: ReportStatus,
        notes: Option<String>,
    ) -> Result<()> {
        if !self.status.is_pending() {
            return Err(create_error!(ReportAlreadyClosed));
        }

        if status.is_pending() {
            return Err(create_error!(InvalidOperation));
        }

        let partial = PartialReport {
            status: Some(status),
            notes,
            updated_at: Some(Timestamp::now_utc()),
        };

        db.update_report(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    pub fn apply_options(&mut self, partial: PartialReport) {
        if let Some(status) = partial.status {
            self.status = status;
        }

        if let Some(notes) = partial.notes {
            self.notes = notes;
        }

        if let Some(updated_at) = partial.updated_at {
            self.updated_at = updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use visaconnect_models::v0::{ReportStatus, ReportedTarget};
    use visaconnect_result::ErrorType;

    use crate::Report;

    fn target() -> ReportedTarget {
        ReportedTarget::Job {
            id: "42".to_string(),
        }
    }

    #[async_std::test]
    async fn create_starts_pending() {
        database_test!(|db| async move {
            let report = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            assert!(report.status.is_pending());
            assert_eq!(report.created_at, report.updated_at);

            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert_eq!(fetched, report);
        });
    }

    #[async_std::test]
    async fn resolve_records_notes_and_closes() {
        database_test!(|db| async move {
            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            report
                .resolve(&db, Some("No violation found".to_string()))
                .await
                .unwrap();

            assert!(matches!(
                report.status,
                ReportStatus::Resolved { closed_at: Some(_) }
            ));
            assert_eq!(report.notes, "No violation found");

            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert_eq!(fetched, report);
        });
    }

    #[async_std::test]
    async fn closed_reports_reject_further_transitions() {
        database_test!(|db| async move {
            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            report.remove(&db, None).await.unwrap();
            let updated_at = report.updated_at;

            let error = report.remove(&db, None).await.unwrap_err();
            assert!(matches!(error.error_type, ErrorType::ReportAlreadyClosed));

            let error = report.resolve(&db, None).await.unwrap_err();
            assert!(matches!(error.error_type, ErrorType::ReportAlreadyClosed));

            // The record is untouched by rejected transitions
            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert!(matches!(fetched.status, ReportStatus::Removed { .. }));
            assert_eq!(fetched.updated_at, updated_at);
        });
    }

    #[async_std::test]
    async fn pending_is_not_a_valid_transition_target() {
        database_test!(|db| async move {
            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            let error = report
                .moderate(&db, ReportStatus::Pending {}, None)
                .await
                .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::InvalidOperation));

            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert!(fetched.status.is_pending());
        });
    }

    #[async_std::test]
    async fn one_pending_report_per_reporter_and_target() {
        database_test!(|db| async move {
            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            let error = Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "Still spam content".to_string(),
            )
            .await
            .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::AlreadyReported));

            // A different reporter is not blocked
            Report::create(
                &db,
                "other".to_string(),
                target(),
                "Spam content here".to_string(),
            )
            .await
            .unwrap();

            // Once closed, the same reporter may file again
            report.resolve(&db, None).await.unwrap();
            Report::create(
                &db,
                "reporter".to_string(),
                target(),
                "It is back again".to_string(),
            )
            .await
            .unwrap();
        });
    }
}
