auto_derived!(
    /// Job posting on the platform
    pub struct Job {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who posted this job
        pub author_id: String,
        /// Position title
        pub title: String,
        /// Hiring company
        pub company: String,
        /// Where the position is based
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,
        /// Full description
        pub description: String,
        /// Whether this job has been hidden by moderation
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub hidden: bool,
    }
);
