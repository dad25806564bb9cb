use visaconnect_result::Result;

use crate::ReferenceDb;
use crate::User;

use super::AbstractUsers;

#[async_trait]
impl AbstractUsers for ReferenceDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            Err(create_database_error!("insert", "user"))
        } else {
            users.insert(user.id.to_string(), user.clone());
            Ok(())
        }
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a user by their session token
    async fn fetch_user_by_token(&self, token: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .values()
            .find(|user| user.token == token)
            .cloned()
            .ok_or_else(|| create_error!(InvalidSession))
    }
}
