//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::ErrorResponse;
use crate::pricing::{PricingError, ValidationError};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Validation(e) => AppError::Validation(e),
            PricingError::Computation { message } => AppError::Computation(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    detail: e.to_string(),
                    error_type: "validation_error",
                    index: e.index,
                },
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    detail: msg.clone(),
                    error_type: "bad_request",
                    index: None,
                },
            ),
            AppError::Computation(msg) => {
                tracing::error!("Computation error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        detail: "Calculation error".to_string(),
                        error_type: "computation_error",
                        index: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::Validation(ValidationError::new("carat is required").at(0)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::BadRequest("eof".into()), StatusCode::BAD_REQUEST),
            (AppError::Computation("overflow".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_pricing_error_conversion() {
        let err: AppError = PricingError::Computation {
            message: "overflow".into(),
        }
        .into();
        assert!(matches!(err, AppError::Computation(m) if m == "overflow"));

        let err: AppError = PricingError::Validation(ValidationError::new("x").at(3)).into();
        assert!(matches!(err, AppError::Validation(e) if e.index == Some(3)));
    }
}
