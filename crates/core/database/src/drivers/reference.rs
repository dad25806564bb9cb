use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Job, Meetup, Report, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub jobs: Arc<Mutex<HashMap<String, Job>>>,
        pub meetups: Arc<Mutex<HashMap<String, Meetup>>>,
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
    }
);

impl ReferenceDb {
    /// Wipe all data
    pub(crate) async fn clear(&self) {
        self.users.lock().await.clear();
        self.jobs.lock().await.clear();
        self.meetups.lock().await.clear();
        self.reports.lock().await.clear();
    }
}
