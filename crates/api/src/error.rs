//! HTTP error mapping
//!
//! Domain errors become a status code plus a JSON body
//! `{ "error": <kind>, "message": <text> }`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mountview_domain::MountviewError;
use serde::Serialize;

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError(pub MountviewError);

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            MountviewError::Network(_) | MountviewError::Upstream(_) => StatusCode::BAD_GATEWAY,
            MountviewError::NotFound(_) => StatusCode::NOT_FOUND,
            MountviewError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MountviewError::Config(_) | MountviewError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<MountviewError> for ApiError {
    fn from(err: MountviewError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(MountviewError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse { error: self.0.kind(), message: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}
