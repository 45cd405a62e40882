// Authentication and authorization error types

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Authentication and authorization error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Username taken")]
    UsernameTaken,

    /// Covers both unknown usernames and wrong passwords
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields => ApiError::Validation(err.to_string()),
            AuthError::UsernameTaken | AuthError::InvalidCredentials => {
                ApiError::Authentication(err.to_string())
            }
            AuthError::MissingToken => ApiError::Unauthorized(err.to_string()),
            AuthError::InvalidToken | AuthError::ExpiredToken => ApiError::Forbidden(err.to_string()),
            AuthError::PasswordHash(_) | AuthError::TokenGeneration(_) => {
                ApiError::Internal(err.to_string())
            }
            AuthError::Database(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
