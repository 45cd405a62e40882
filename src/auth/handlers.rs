// HTTP handlers for authentication endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ApiError;
use crate::models::SuccessResponse;
use crate::validation;
use crate::AppState;

/// Register a new user
/// POST /api/register
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = SuccessResponse),
        (status = 400, description = "Missing fields or username taken", body = crate::error::ErrorResponse, example = json!({"error": "Username taken"}))
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request = validation::body_or_default(body);
    tracing::debug!("Registering user: {}", request.username);

    validation::check(&request, "Missing fields").map_err(ApiError::Validation)?;

    state
        .auth_service
        .register(&request.username, &request.password)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// Login a user
/// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = crate::error::ErrorResponse, example = json!({"error": "Invalid credentials"}))
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = validation::body_or_default(body);
    tracing::debug!("Login attempt for user: {}", request.username);

    let token = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
