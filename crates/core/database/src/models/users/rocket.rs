use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};
use rocket_okapi::{
    gen::OpenApiGenerator,
    okapi::openapi3::{Parameter, ParameterValue},
    request::{OpenApiFromRequest, RequestHeaderInput},
};
use schemars::schema::{InstanceType, SchemaObject, SingleOrVec};
use visaconnect_result::Error;

use crate::{Database, User};

#[rocket::async_trait]
impl<'r> FromRequest<'r> for User {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let user: &Option<User> = request
            .local_cache_async(async {
                let db = request.rocket().state::<Database>().expect("`Database`");

                if let Some(token) = request
                    .headers()
                    .get("x-session-token")
                    .next()
                    .map(|x| x.to_string())
                {
                    db.fetch_user_by_token(&token).await.ok()
                } else {
                    None
                }
            })
            .await;

        if let Some(user) = user {
            Outcome::Success(user.clone())
        } else {
            Outcome::Error((Status::Unauthorized, create_error!(InvalidSession)))
        }
    }
}

impl OpenApiFromRequest<'_> for User {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        Ok(RequestHeaderInput::Parameter(Parameter {
            name: "x-session-token".to_string(),
            description: Some("Session token issued by the auth layer".to_string()),
            allow_empty_value: false,
            required: true,
            deprecated: false,
            extensions: schemars::Map::new(),
            location: "header".to_string(),
            value: ParameterValue::Schema {
                allow_reserved: false,
                example: None,
                examples: None,
                explode: None,
                style: None,
                schema: SchemaObject {
                    instance_type: Some(SingleOrVec::Single(Box::new(InstanceType::String))),
                    ..Default::default()
                },
            },
        }))
    }
}
