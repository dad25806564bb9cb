use visaconnect_result::Result;

#[cfg(feature = "rocket-impl")]
use rocket::request::FromParam;
#[cfg(feature = "rocket-impl")]
use schemars::{
    schema::{InstanceType, Schema, SchemaObject, SingleOrVec},
    JsonSchema,
};

use crate::{Database, Job, Meetup, Report, User};

/// Reference to some object in the database
pub struct Reference {
    /// Id of object
    pub id: String,
}

impl Reference {
    /// Create a Reference from an unchecked string
    pub fn from_unchecked(id: String) -> Reference {
        Reference { id }
    }

    /// Fetch report from Reference
    pub async fn as_report(&self, db: &Database) -> Result<Report> {
        db.fetch_report(&self.id).await
    }

    /// Fetch job from Reference
    pub async fn as_job(&self, db: &Database) -> Result<Job> {
        db.fetch_job(&self.id).await
    }

    /// Fetch meetup from Reference
    pub async fn as_meetup(&self, db: &Database) -> Result<Meetup> {
        db.fetch_meetup(&self.id).await
    }

    /// Fetch user from Reference
    pub async fn as_user(&self, db: &Database) -> Result<User> {
        db.fetch_user(&self.id).await
    }
}

#[cfg(feature = "rocket-impl")]
impl<'r> FromParam<'r> for Reference {
    type Error = &'r str;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        Ok(Reference::from_unchecked(param.to_string()))
    }
}

#[cfg(feature = "rocket-impl")]
impl JsonSchema for Reference {
    fn schema_name() -> String {
        "Id".to_string()
    }

    fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> Schema {
        Schema::Object(SchemaObject {
            instance_type: Some(SingleOrVec::Single(Box::new(InstanceType::String))),
            ..Default::default()
        })
    }
}
