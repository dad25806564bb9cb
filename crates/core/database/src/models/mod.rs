mod jobs;
mod meetups;
mod reports;
mod users;

pub use jobs::*;
pub use meetups::*;
pub use reports::*;
pub use users::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + jobs::AbstractJobs
    + meetups::AbstractMeetups
    + reports::AbstractReports
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
