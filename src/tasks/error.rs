use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Service-level errors for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Missing title")]
    MissingTitle,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::MissingTitle => ApiError::Validation(err.to_string()),
            TaskError::DatabaseError(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
