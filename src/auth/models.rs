// Authentication data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Registration request DTO
///
/// Absent fields deserialize as empty strings so they fail validation with
/// "Missing fields" instead of a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing fields"))]
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing fields"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Login request DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}
