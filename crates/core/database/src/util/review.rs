use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;
use visaconnect_result::Result;

use crate::{Database, Report};

/// Moderator-scoped holder for the report currently under review.
///
/// One review touches several requests (detail, target, decision); the
/// selection is kept here so the report is read from the database at most
/// once per selection, even when those requests race.
#[derive(Default)]
pub struct ReviewSession {
    selected: Mutex<Option<Report>>,
}

impl ReviewSession {
    /// Seed the selection from a report the caller already holds
    pub async fn prime(&self, report: Report) {
        self.selected.lock().await.replace(report);
    }

    /// Currently selected report, if any
    pub async fn selected(&self) -> Option<Report> {
        self.selected.lock().await.clone()
    }

    /// Return the selected report, fetching it once if absent.
    ///
    /// The slot lock is held across the fetch, so concurrent callers asking
    /// for the same report coalesce into a single database read.
    pub async fn get_or_fetch(&self, db: &Database, id: &str) -> Result<Report> {
        let mut selected = self.selected.lock().await;

        if let Some(report) = selected.as_ref() {
            if report.id == id {
                return Ok(report.clone());
            }
        }

        let report = db.fetch_report(id).await?;
        selected.replace(report.clone());
        Ok(report)
    }

    /// Replace the cached copy after a moderation action
    pub async fn sync(&self, report: &Report) {
        let mut selected = self.selected.lock().await;
        if selected
            .as_ref()
            .is_some_and(|current| current.id == report.id)
        {
            selected.replace(report.clone());
        }
    }

    /// Drop the selection
    pub async fn clear(&self) {
        self.selected.lock().await.take();
    }
}

/// Review sessions keyed by moderator id
#[derive(Default)]
pub struct ReviewRegistry {
    sessions: Mutex<HashMap<String, Arc<ReviewSession>>>,
}

impl ReviewRegistry {
    /// Session for the given moderator, created on first use
    pub async fn session(&self, moderator_id: &str) -> Arc<ReviewSession> {
        self.sessions
            .lock()
            .await
            .entry(moderator_id.to_string())
            .or_default()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use visaconnect_models::v0::ReportedTarget;
    use visaconnect_result::ErrorType;

    use super::{ReviewRegistry, ReviewSession};
    use crate::{Database, DatabaseInfo, Report};

    async fn fixture() -> (Database, Report) {
        let db = DatabaseInfo::Reference
            .connect()
            .await
            .expect("Database connection failed.");

        let report = Report::create(
            &db,
            "reporter".to_string(),
            ReportedTarget::Job {
                id: "42".to_string(),
            },
            "Spam content here".to_string(),
        )
        .await
        .unwrap();

        (db, report)
    }

    async fn forget_report(db: &Database, id: &str) {
        match db {
            Database::Reference(reference) => {
                reference.reports.lock().await.remove(id);
            }
            #[cfg(feature = "mongodb")]
            _ => unreachable!(),
        }
    }

    #[async_std::test]
    async fn primed_selection_is_served_without_a_fetch() {
        let (db, report) = fixture().await;

        let session = ReviewSession::default();
        session.prime(report.clone()).await;

        // Make the report unfetchable; only the cache can serve it now
        forget_report(&db, &report.id).await;

        let selected = session.get_or_fetch(&db, &report.id).await.unwrap();
        assert_eq!(selected, report);
    }

    #[async_std::test]
    async fn concurrent_callers_share_a_single_fetch() {
        let (db, report) = fixture().await;

        let session = ReviewSession::default();
        let (first, second) = futures::join!(
            session.get_or_fetch(&db, &report.id),
            session.get_or_fetch(&db, &report.id)
        );
        assert_eq!(first.unwrap(), report);
        assert_eq!(second.unwrap(), report);

        // Both were served by one fetch; the selection outlives the record
        forget_report(&db, &report.id).await;
        assert_eq!(session.get_or_fetch(&db, &report.id).await.unwrap(), report);

        // A fresh session has no selection to fall back on
        let fresh = ReviewSession::default();
        let error = fresh.get_or_fetch(&db, &report.id).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::NotFound));
    }

    #[async_std::test]
    async fn switching_selection_fetches_the_new_report() {
        let (db, report) = fixture().await;

        let other = Report::create(
            &db,
            "other".to_string(),
            ReportedTarget::Meetup {
                id: "7".to_string(),
            },
            "Harassment in comments".to_string(),
        )
        .await
        .unwrap();

        let session = ReviewSession::default();
        session.prime(report.clone()).await;

        let selected = session.get_or_fetch(&db, &other.id).await.unwrap();
        assert_eq!(selected, other);
        assert_eq!(session.selected().await, Some(other));
    }

    #[async_std::test]
    async fn sync_updates_only_the_matching_selection() {
        let (db, mut report) = fixture().await;

        let session = ReviewSession::default();
        session.prime(report.clone()).await;

        report.resolve(&db, Some("No violation found".to_string()))
            .await
            .unwrap();
        session.sync(&report).await;

        let selected = session.selected().await.unwrap();
        assert!(!selected.status.is_pending());
        assert_eq!(selected.notes, "No violation found");
    }

    #[async_std::test]
    async fn cleared_selection_requires_a_fresh_fetch() {
        let (db, report) = fixture().await;

        let session = ReviewSession::default();
        session.prime(report.clone()).await;
        session.clear().await;
        assert!(session.selected().await.is_none());

        // With the selection gone, only the database can serve the report
        forget_report(&db, &report.id).await;
        let error = session.get_or_fetch(&db, &report.id).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::NotFound));
    }

    #[async_std::test]
    async fn registry_scopes_sessions_per_moderator() {
        let (db, report) = fixture().await;

        let registry = ReviewRegistry::default();
        let session = registry.session("admin_a").await;
        session.get_or_fetch(&db, &report.id).await.unwrap();

        // Same moderator gets the same session back
        assert!(registry.session("admin_a").await.selected().await.is_some());

        // Another moderator starts empty
        assert!(registry.session("admin_b").await.selected().await.is_none());
    }
}
