use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::error::Error;

use std::fmt;
use std::io::Cursor;
use std::sync::PoisonError;

/// Request failures, bucketed by the HTTP status they map to. Bad input is a
/// 400 and an unresolvable identifier a 404; anything the storage layer
/// throws at us surfaces as a 500.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Storage(String),
}

impl Error for ApiError {}
impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Validation(what) => write!(f, "Validation error: {}", what),
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
            ApiError::Storage(what) => write!(f, "Storage error: {}", what),
        }
    }
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Storage(_) => Status::InternalServerError,
        }
    }
}

impl<T> From<PoisonError<T>> for ApiError {
    fn from(e: PoisonError<T>) -> ApiError {
        ApiError::Storage(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> ApiError {
        match e {
            rusqlite::Error::QueryReturnedNoRows => {
                ApiError::NotFound("no such record".to_string())
            }
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        if let ApiError::Storage(what) = &self {
            log::error!("storage failure: {}", what);
        }
        let body = serde_json::json!({ "error": self.to_string() }).to_string();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
