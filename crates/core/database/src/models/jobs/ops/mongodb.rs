use visaconnect_result::Result;

use crate::Job;
use crate::MongoDb;

use super::AbstractJobs;

static COL: &str = "jobs";

#[async_trait]
impl AbstractJobs for MongoDb {
    /// Insert a new job into the database
    async fn insert_job(&self, job: &Job) -> Result<()> {
        query!(self, insert_one, COL, &job).map(|_| ())
    }

    /// Fetch a job by its id
    async fn fetch_job(&self, id: &str) -> Result<Job> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Hide a job following a moderation decision
    async fn hide_job(&self, id: &str) -> Result<()> {
        query!(self, update_one_by_id, COL, id, &doc! { "hidden": true }).and_then(|result| {
            if result.matched_count == 0 {
                Err(create_error!(NotFound))
            } else {
                Ok(())
            }
        })
    }
}
