use visaconnect_result::Result;

use crate::Meetup;
use crate::ReferenceDb;

use super::AbstractMeetups;

#[async_trait]
impl AbstractMeetups for ReferenceDb {
    /// Insert a new meetup into the database
    async fn insert_meetup(&self, meetup: &Meetup) -> Result<()> {
        let mut meetups = self.meetups.lock().await;
        if meetups.contains_key(&meetup.id) {
            Err(create_database_error!("insert", "meetup"))
        } else {
            meetups.insert(meetup.id.to_string(), meetup.clone());
            Ok(())
        }
    }

    /// Fetch a meetup by its id
    async fn fetch_meetup(&self, id: &str) -> Result<Meetup> {
        let meetups = self.meetups.lock().await;
        meetups
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Hide a meetup following a moderation decision
    async fn hide_meetup(&self, id: &str) -> Result<()> {
        let mut meetups = self.meetups.lock().await;
        if let Some(meetup) = meetups.get_mut(id) {
            meetup.hidden = true;
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
