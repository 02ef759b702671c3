//! Mapping of domain failures to HTTP responses.
//!
//! Every error body has the shape `{"error": CODE, "message": text}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use chaff_core::normalize::{AmountInputError, INVALID_AMOUNT_MESSAGE};
use chaff_core::periods::PeriodError;
use chaff_db::repositories::{MandateError, PayrollError, ReportError, RevenueError};
use chaff_shared::AppError;

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Validation failure with a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }

    /// Missing resource.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.public_message(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<AmountInputError> for ApiError {
    fn from(err: AmountInputError) -> Self {
        Self::validation(err.user_message())
    }
}

impl From<PeriodError> for ApiError {
    fn from(err: PeriodError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<MandateError> for ApiError {
    fn from(err: MandateError) -> Self {
        match err {
            MandateError::NotFound(_) => Self::not_found("Mandate not found"),
            MandateError::EmptyField(_) => Self::validation(err.to_string()),
            MandateError::Database(e) => e.into(),
        }
    }
}

impl From<RevenueError> for ApiError {
    fn from(err: RevenueError) -> Self {
        match err {
            RevenueError::NegativeValue => Self::validation(INVALID_AMOUNT_MESSAGE),
            RevenueError::Database(e) => e.into(),
        }
    }
}

impl From<PayrollError> for ApiError {
    fn from(err: PayrollError) -> Self {
        match err {
            PayrollError::Invalid(e) => e.into(),
            PayrollError::Database(e) => e.into(),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Corrupt(e) => Self(AppError::Internal(e.to_string())),
            ReportError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use uuid::Uuid;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_amount_error_is_bad_request() {
        let response = ApiError::from(AmountInputError::NotANumber).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Please enter a valid numeric value");
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let response =
            ApiError::from(DbErr::Custom("connection refused".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "An error occurred");
    }

    #[tokio::test]
    async fn test_unknown_mandate_is_not_found() {
        let response = ApiError::from(MandateError::NotFound(Uuid::new_v4())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "NOT_FOUND");
    }

    #[test]
    fn test_negative_revenue_uses_amount_message() {
        let ApiError(err) = ApiError::from(RevenueError::NegativeValue);
        assert_eq!(err.public_message(), INVALID_AMOUNT_MESSAGE);
    }
}
