use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mbtx_core::errors::{Error as CoreError, ValidationError};
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Core(err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Core(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {}", e),
            ),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", detail);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", detail);
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
