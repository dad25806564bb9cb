use visaconnect_result::Result;

use crate::Job;
use crate::ReferenceDb;

use super::AbstractJobs;

#[async_trait]
impl AbstractJobs for ReferenceDb {
    /// Insert a new job into the database
    async fn insert_job(&self, job: &Job) -> Result<()> {
        let mut jobs = self.jobs.lock().await;
        if jobs.contains_key(&job.id) {
            Err(create_database_error!("insert", "job"))
        } else {
            jobs.insert(job.id.to_string(), job.clone());
            Ok(())
        }
    }

    /// Fetch a job by its id
    async fn fetch_job(&self, id: &str) -> Result<Job> {
        let jobs = self.jobs.lock().await;
        jobs.get(id).cloned().ok_or_else(|| create_error!(NotFound))
    }

    /// Hide a job following a moderation decision
    async fn hide_job(&self, id: &str) -> Result<()> {
        let mut jobs = self.jobs.lock().await;
        if let Some(job) = jobs.get_mut(id) {
            job.hidden = true;
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
