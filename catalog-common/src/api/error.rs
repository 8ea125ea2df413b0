//! Mapping of catalog errors onto HTTP responses
//!
//! - InvalidRequest → 400
//! - NotFound → 404
//! - StoreFailure → 500, logged here; the client only sees a generic message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::types::MessageBody;
use crate::Error;

/// Message returned to clients for any store failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Handler-boundary error
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    NotFound(String),
    StoreFailure(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ApiError::InvalidRequest(msg),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::StoreFailure(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InvalidRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::StoreFailure(detail) => {
                error!("Store operation failed: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(MessageBody { message })).into_response()
    }
}
