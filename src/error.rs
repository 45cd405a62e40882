// Error handling module for the task tracker API
// Maps every failure onto an HTTP status and a `{"error": "..."}` body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

/// Main error type for the API
/// All handlers return Result<T, ApiError>
///
/// Each variant maps to one HTTP status code. Storage and internal errors
/// keep their details for the logs only.
#[derive(Debug)]
pub enum ApiError {
    /// A required request field is absent or empty
    /// Maps to HTTP 400 Bad Request
    Validation(String),

    /// Bad credentials or duplicate username
    /// Maps to HTTP 400 Bad Request
    Authentication(String),

    /// No bearer token was presented
    /// Maps to HTTP 401 Unauthorized
    Unauthorized(String),

    /// Bearer token is malformed, badly signed or expired
    /// Maps to HTTP 403 Forbidden
    Forbidden(String),

    /// Underlying store failure
    /// Maps to HTTP 500, the client only sees "DB error"
    Database(sqlx::Error),

    /// Any other server-side failure (hashing, token signing)
    /// Maps to HTTP 500 with a generic message
    Internal(String),
}

/// JSON body returned for every error
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing fields")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to the client
    ///
    /// Logging happens here, once per response, at a level matching severity:
    /// debug for expected client mistakes, warn for rejected credentials,
    /// error for anything that became a 500.
    fn client_message(&self) -> String {
        match self {
            ApiError::Validation(message) => {
                debug!("Validation error: {}", message);
                message.clone()
            }
            ApiError::Authentication(message) => {
                warn!("Authentication failed: {}", message);
                message.clone()
            }
            ApiError::Unauthorized(message) => {
                warn!("Unauthorized access attempt: {}", message);
                message.clone()
            }
            ApiError::Forbidden(message) => {
                warn!("Forbidden access attempt: {}", message);
                message.clone()
            }
            ApiError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                "DB error".to_string()
            }
            ApiError::Internal(internal_msg) => {
                error!("Internal error: {}", internal_msg);
                "Internal server error".to_string()
            }
        }
    }
}

/// Convert sqlx errors to ApiError
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::Database(error)
    }
}
