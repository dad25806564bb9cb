use visaconnect_result::Result;

use crate::Meetup;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractMeetups: Sync + Send {
    /// Insert a new meetup into the database
    async fn insert_meetup(&self, meetup: &Meetup) -> Result<()>;

    /// Fetch a meetup by its id
    async fn fetch_meetup(&self, id: &str) -> Result<Meetup>;

    /// Hide a meetup following a moderation decision
    async fn hide_meetup(&self, id: &str) -> Result<()>;
}
