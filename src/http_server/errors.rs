//! # HTTP Errors
//!
//! Turns dashboard errors into JSON responses:
//!
//! ```json
//! { "error": "...", "code": 422, "notice": {...}, "errors": [...] }
//! ```
//!
//! `errors` is present only for validation failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::dashboard::{DashboardError, Notice};
use crate::student::ValidationErrors;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub notice: Notice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl From<DashboardError> for ErrorResponse {
    fn from(err: DashboardError) -> Self {
        let notice = err.notice();
        let code = err.status_code();
        let error = err.to_string();
        let errors = match err {
            DashboardError::Validation(errors) => Some(errors),
            _ => None,
        };
        Self {
            error,
            code,
            notice,
            errors,
        }
    }
}

/// Handler error wrapper
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.0.is_client_error() {
            warn!(status = status.as_u16(), error = %self.0, "request rejected");
        } else {
            error!(status = status.as_u16(), error = %self.0, "request failed");
        }
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use crate::student::{FieldError, FieldErrorKind};

    #[test]
    fn test_validation_body_lists_fields() {
        let errors = ValidationErrors::single(FieldError::new(
            "zip_code",
            FieldErrorKind::InvalidFormat,
            "Invalid ZIP code",
        ));
        let body = serde_json::to_value(ErrorResponse::from(DashboardError::Validation(errors))).unwrap();

        assert_eq!(body["code"], 422);
        assert_eq!(body["errors"][0]["field"], "zip_code");
        assert_eq!(body["errors"][0]["message"], "Invalid ZIP code");
    }

    #[test]
    fn test_store_failure_status() {
        let response =
            ApiError(DashboardError::Fetch(StoreError::Transport("down".into()))).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
