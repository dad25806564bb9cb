use visaconnect_result::Result;

use crate::User;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User>;

    /// Fetch a user by their session token
    async fn fetch_user_by_token(&self, token: &str) -> Result<User>;
}
