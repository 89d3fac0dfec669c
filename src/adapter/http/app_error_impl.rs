use crate::application::app_error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "About profile not found for this user")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, Some(message.clone())),
            AppError::ProfileAlreadyExists => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            AppError::PermissionDenied(message) => (StatusCode::FORBIDDEN, Some(message.clone())),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, None),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Some("Invalid Credentials".to_string()),
            ),
            AppError::JsonParseError(rejection) => (StatusCode::BAD_REQUEST, Some(rejection.to_string())),
            AppError::ValidationError(errors) => (StatusCode::BAD_REQUEST, Some(errors.to_string())),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or_else(|| "Unknown error")
                .to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}
