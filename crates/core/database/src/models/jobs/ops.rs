use visaconnect_result::Result;

use crate::Job;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractJobs: Sync + Send {
    /// Insert a new job into the database
    async fn insert_job(&self, job: &Job) -> Result<()>;

    /// Fetch a job by its id
    async fn fetch_job(&self, id: &str) -> Result<Job>;

    /// Hide a job following a moderation decision
    async fn hide_job(&self, id: &str) -> Result<()>;
}
