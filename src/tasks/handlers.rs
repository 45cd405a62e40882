// HTTP handlers for task endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::SuccessResponse;
use crate::tasks::models::{CreateTaskRequest, CreatedTaskResponse, TaskResponse, UpdateTaskRequest};
use crate::validation;
use crate::AppState;

/// List the caller's tasks
/// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks owned by the caller", body = Vec<TaskResponse>),
        (status = 401, description = "Missing token", body = crate::error::ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse, example = json!({"error": "DB error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn list_tasks_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.task_service.list(user.user_id).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create a task owned by the caller
/// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = CreatedTaskResponse),
        (status = 400, description = "Missing title", body = crate::error::ErrorResponse, example = json!({"error": "Missing title"})),
        (status = 401, description = "Missing token", body = crate::error::ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse, example = json!({"error": "DB error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn create_task_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<CreatedTaskResponse>, ApiError> {
    let request = validation::body_or_default(body);
    validation::check(&request, "Missing title").map_err(ApiError::Validation)?;

    let task = state.task_service.create(user.user_id, &request.title).await?;

    Ok(Json(CreatedTaskResponse::from(task)))
}

/// Set the completed flag on one of the caller's tasks
/// PUT /api/tasks/{id}
///
/// Answers `{"success": true}` even if the id is unknown, unparseable or not
/// the caller's. A missing or unreadable body means `completed = false`.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Update applied (or nothing matched)", body = SuccessResponse),
        (status = 401, description = "Missing token", body = crate::error::ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse, example = json!({"error": "DB error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn update_task_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request = validation::body_or_default(body);

    if let Some(task_id) = validation::path_id(task_id) {
        state
            .task_service
            .set_completed(user.user_id, task_id, request.completed)
            .await?;
    }

    Ok(Json(SuccessResponse::ok()))
}

/// Delete one of the caller's tasks
/// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted (or nothing matched)", body = SuccessResponse),
        (status = 401, description = "Missing token", body = crate::error::ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse, example = json!({"error": "DB error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn delete_task_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if let Some(task_id) = validation::path_id(task_id) {
        state.task_service.delete(user.user_id, task_id).await?;
    }

    Ok(Json(SuccessResponse::ok()))
}
