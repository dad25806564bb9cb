use iso8601_timestamp::Timestamp;

auto_derived!(
    /// The content a report is filed against
    #[cfg_attr(feature = "serde", serde(tag = "target_type", rename_all = "lowercase"))]
    pub enum ReportedTarget {
        /// Report a job posting
        Job {
            /// Id of the job
            #[cfg_attr(feature = "serde", serde(rename = "target_id"))]
            id: String,
        },
        /// Report a meetup
        Meetup {
            /// Id of the meetup
            #[cfg_attr(feature = "serde", serde(rename = "target_id"))]
            id: String,
        },
    }

    /// Status of a report
    #[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
    pub enum ReportStatus {
        /// Report is waiting for a moderator decision
        Pending {},

        /// Report was reviewed and closed, content left untouched
        Resolved {
            #[cfg_attr(feature = "schemas", schemars(with = "Option<String>"))]
            closed_at: Option<Timestamp>,
        },

        /// Report was actioned and the content marked for removal
        Removed {
            #[cfg_attr(feature = "schemas", schemars(with = "Option<String>"))]
            closed_at: Option<Timestamp>,
        },
    }

    /// Just the status of a report, for query filters
    #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
    #[cfg_attr(feature = "rocket", derive(rocket::FromFormField))]
    pub enum ReportStatusString {
        Pending,
        Resolved,
        Removed,
    }
);

impl ReportedTarget {
    /// Id of the reported entity
    pub fn id(&self) -> &str {
        match self {
            ReportedTarget::Job { id } | ReportedTarget::Meetup { id } => id,
        }
    }
}

impl ReportStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ReportStatus::Pending {})
    }
}
