auto_derived!(
    /// User on the platform.
    ///
    /// Registration and credentials live with the external auth provider;
    /// this record only carries what moderation needs.
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display name
        pub username: String,
        /// Session token issued by the auth layer
        pub token: String,
        /// Whether this user may moderate reports
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub privileged: bool,
    }
);
