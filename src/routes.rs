use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{self, LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ErrorResponse;
use crate::models::{HealthResponse, SuccessResponse};
use crate::tasks::{self, CreateTaskRequest, CreatedTaskResponse, TaskResponse, UpdateTaskRequest};
use crate::AppState;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        tasks::handlers::list_tasks_handler,
        tasks::handlers::create_task_handler,
        tasks::handlers::update_task_handler,
        tasks::handlers::delete_task_handler,
    ),
    components(
        schemas(
            RegisterRequest, LoginRequest, LoginResponse,
            CreateTaskRequest, UpdateTaskRequest, TaskResponse, CreatedTaskResponse,
            SuccessResponse, HealthResponse, ErrorResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "tasks", description = "Per-user task management"),
        (name = "health", description = "Liveness check")
    ),
    info(
        title = "Task Tracker API",
        version = "0.1.0",
        description = "Multi-user task tracker with bearer token authentication"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Liveness check
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// CORS policy for the browser client served from `origin`
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds tracing and CORS middleware
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        // Auth routes
        .route("/api/register", post(auth::register_handler))
        .route("/api/login", post(auth::login_handler))
        // Task routes
        .route(
            "/api/tasks",
            get(tasks::list_tasks_handler).post(tasks::create_task_handler),
        )
        .route(
            "/api/tasks/:id",
            put(tasks::update_task_handler).delete(tasks::delete_task_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
