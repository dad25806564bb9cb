use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::NotAuthenticated => Status::Unauthorized,
            ErrorType::InvalidSession => Status::Unauthorized,
            ErrorType::NotPrivileged => Status::Forbidden,

            ErrorType::CannotReportYourself => Status::BadRequest,
            ErrorType::AlreadyReported => Status::Conflict,
            ErrorType::ReportAlreadyClosed => Status::Conflict,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidOperation => Status::BadRequest,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
        };

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
