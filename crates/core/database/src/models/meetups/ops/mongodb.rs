use visaconnect_result::Result;

use crate::Meetup;
use crate::MongoDb;

use super::AbstractMeetups;

static COL: &str = "meetups";

#[async_trait]
impl AbstractMeetups for MongoDb {
    /// Insert a new meetup into the database
    async fn insert_meetup(&self, meetup: &Meetup) -> Result<()> {
        query!(self, insert_one, COL, &meetup).map(|_| ())
    }

    /// Fetch a meetup by its id
    async fn fetch_meetup(&self, id: &str) -> Result<Meetup> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Hide a meetup following a moderation decision
    async fn hide_meetup(&self, id: &str) -> Result<()> {
        query!(self, update_one_by_id, COL, id, &doc! { "hidden": true }).and_then(|result| {
            if result.matched_count == 0 {
                Err(create_error!(NotFound))
            } else {
                Ok(())
            }
        })
    }
}
