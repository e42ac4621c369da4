//! Conversion from [`AppError`] to HTTP responses with a `{ "error": ... }` body

use crate::shared::errors::AppError;
use crate::{log_debug, log_error, log_warn};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Non-standard "client closed request" status
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::InvalidInput(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        AppError::Cancelled => StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        AppError::RateLimitError(_) => StatusCode::TOO_MANY_REQUESTS,
        AppError::ExternalServiceError(_) | AppError::ApiError(_) => StatusCode::BAD_GATEWAY,
        AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AppError::DatabaseError(_)
        | AppError::InternalError(_)
        | AppError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        if self.is_cancelled() {
            log_debug!("Request cancelled by client");
        } else if status.is_server_error() {
            log_error!("Request failed ({}): {}", status.as_u16(), self);
        } else {
            log_warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}
