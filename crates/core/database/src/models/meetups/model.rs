use iso8601_timestamp::Timestamp;

auto_derived!(
    /// Local meetup organised by a user
    pub struct Meetup {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user organising this meetup
        pub author_id: String,
        /// Meetup title
        pub title: String,
        /// Where the meetup takes place
        pub location: String,
        /// When the meetup starts
        #[cfg_attr(feature = "schemas", schemars(with = "String"))]
        pub starts_at: Timestamp,
        /// Full description
        pub description: String,
        /// Whether this meetup has been hidden by moderation
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub hidden: bool,
    }
);
