use axum::extract::rejection::JsonRejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("User already has an about profile. Use PUT to update it.")]
    ProfileAlreadyExists,
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    InvalidId(String),
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error(transparent)]
    JsonParseError(#[from] JsonRejection),
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
}

pub type AppResult<T> = Result<T, AppError>;
