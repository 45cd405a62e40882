// Handler tests for the task tracker API
// Every route is driven through the real router against in-memory SQLite

use super::*;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use crate::auth::Claims;
use crate::tasks::{CreatedTaskResponse, TaskResponse};

const TEST_SECRET: &str = "router_test_secret";

// ============================================================================
// Test Helpers
// ============================================================================

/// Helper function to create a test server over a fresh in-memory database
async fn create_test_server() -> TestServer {
    let pool = db::create_memory_pool()
        .await
        .expect("Failed to create in-memory pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(pool, TokenService::new(TEST_SECRET, 24));
    let cors = cors_layer("http://localhost:5173").unwrap();

    TestServer::new(create_router(state, cors)).unwrap()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

/// Register and log in a user, returning the session token
async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/register")
        .json(&json!({"username": username, "password": password}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/login")
        .json(&json!({"username": username, "password": password}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

async fn list_tasks(server: &TestServer, token: &str) -> Vec<TaskResponse> {
    let response = server
        .get("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

async fn create_task(server: &TestServer, token: &str, title: &str) -> CreatedTaskResponse {
    let response = server
        .post("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(token))
        .json(&json!({"title": title}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

// ============================================================================
// Register / Login
// ============================================================================

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server().await;

    let response = server
        .post("/api/register")
        .json(&json!({"username": "alice", "password": "pw"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = create_test_server().await;

    for payload in [
        json!({}),
        json!({"username": "alice"}),
        json!({"password": "pw"}),
        json!({"username": "", "password": "pw"}),
    ] {
        let response = server.post("/api/register").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing fields");
    }
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = create_test_server().await;
    let payload = json!({"username": "alice", "password": "pw"});

    server.post("/api/register").json(&payload).await;
    let response = server.post("/api/register").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username taken");
}

#[tokio::test]
async fn test_register_unreadable_body_is_missing_fields() {
    let server = create_test_server().await;

    let response = server.post("/api/register").text("username=alice&password=pw").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing fields"}));

    let response = server.post("/api/register").json(&json!({"username": 5})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing fields"}));

    let response = server.post("/api/register").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing fields"}));
}

#[tokio::test]
async fn test_login_unreadable_body_is_invalid_credentials() {
    let server = create_test_server().await;
    register_and_login(&server, "alice", "pw").await;

    let response = server.post("/api/login").text("alice:pw").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Invalid credentials"}));

    let response = server
        .post("/api/login")
        .json(&json!({"username": ["alice"], "password": "pw"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;

    let claims = TokenService::new(TEST_SECRET, 24).validate_token(&token).unwrap();
    assert_eq!(claims.username, "alice");
    assert!(claims.user_id().unwrap() > 0);
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let server = create_test_server().await;
    register_and_login(&server, "alice", "pw").await;

    let wrong_password = server
        .post("/api/login")
        .json(&json!({"username": "alice", "password": "nope"}))
        .await;
    let unknown_user = server
        .post("/api/login")
        .json(&json!({"username": "nobody", "password": "pw"}))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status_code(), StatusCode::BAD_REQUEST);

    let a: Value = wrong_password.json();
    let b: Value = unknown_user.json();
    assert_eq!(a, json!({"error": "Invalid credentials"}));
    assert_eq!(a, b);
}

// ============================================================================
// Authorization guard
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_401() {
    let server = create_test_server().await;

    let response = server.get("/api/tasks").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.post("/api/tasks").json(&json!({"title": "x"})).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.delete("/api/tasks/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authorization_without_scheme_is_401() {
    let server = create_test_server().await;

    let response = server
        .get("/api/tasks")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("sometoken"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing token");
}

#[tokio::test]
async fn test_invalid_token_is_403() {
    let server = create_test_server().await;

    let response = server
        .get("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer("not-a-jwt"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let foreign = TokenService::new("other_secret", 24)
        .generate_token(1, "alice")
        .unwrap();
    let response = server
        .get("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(&foreign))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_token_is_403() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;
    let claims = TokenService::new(TEST_SECRET, 24).validate_token(&token).unwrap();

    let now = chrono::Utc::now().timestamp();
    let expired = encode(
        &Header::default(),
        &Claims {
            sub: claims.sub,
            username: claims.username,
            iat: now - 90_000,
            exp: now - 3_600,
        },
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .get("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(&expired))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "Token expired");
}

// ============================================================================
// Tasks
// ============================================================================

#[tokio::test]
async fn test_create_task_missing_title() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;

    for payload in [json!({}), json!({"title": ""})] {
        let response = server
            .post("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&payload)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing title");
    }
}

#[tokio::test]
async fn test_create_task_unreadable_body_is_missing_title() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;

    let response = server
        .post("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .text("buy milk")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing title"}));

    let response = server
        .post("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"title": 7}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing title"}));

    assert!(list_tasks(&server, &token).await.is_empty());
}

#[tokio::test]
async fn test_update_without_body_marks_incomplete() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;
    let task = create_task(&server, &token, "x").await;

    server
        .put(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"completed": true}))
        .await;
    assert_eq!(list_tasks(&server, &token).await[0].completed, 1);

    let response = server
        .put(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));
    assert_eq!(list_tasks(&server, &token).await[0].completed, 0);
}

#[tokio::test]
async fn test_non_numeric_task_id_is_a_no_op() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;
    create_task(&server, &token, "x").await;

    let response = server
        .put("/api/tasks/abc")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"completed": true}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));

    let response = server
        .delete("/api/tasks/abc")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));

    let tasks = list_tasks(&server, &token).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].completed, 0);
}

#[tokio::test]
async fn test_tasks_are_private_to_owner() {
    let server = create_test_server().await;
    let alice = register_and_login(&server, "alice", "pw").await;
    let bob = register_and_login(&server, "bob", "pw").await;

    let task = create_task(&server, &alice, "buy milk").await;

    assert!(list_tasks(&server, &bob).await.is_empty());
    let alices = list_tasks(&server, &alice).await;
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].id, task.id);
}

#[tokio::test]
async fn test_foreign_update_and_delete_are_no_ops() {
    let server = create_test_server().await;
    let alice = register_and_login(&server, "alice", "pw").await;
    let bob = register_and_login(&server, "bob", "pw").await;
    let task = create_task(&server, &alice, "buy milk").await;

    let response = server
        .put(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&bob))
        .json(&json!({"completed": true}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));

    let response = server
        .delete(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&bob))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let alices = list_tasks(&server, &alice).await;
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].completed, 0);
}

#[tokio::test]
async fn test_update_accepts_integer_flag() {
    let server = create_test_server().await;
    let token = register_and_login(&server, "alice", "pw").await;
    let task = create_task(&server, &token, "x").await;

    server
        .put(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"completed": 1}))
        .await;
    assert_eq!(list_tasks(&server, &token).await[0].completed, 1);

    server
        .put(&format!("/api/tasks/{}", task.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"completed": 0}))
        .await;
    assert_eq!(list_tasks(&server, &token).await[0].completed, 0);
}

#[tokio::test]
async fn test_end_to_end_flow() {
    let server = create_test_server().await;

    let token = register_and_login(&server, "alice", "pw").await;

    // Create
    let response = server
        .post("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"title": "x"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"id": 1, "title": "x", "completed": 0}));

    // List
    let tasks = list_tasks(&server, &token).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 1);
    assert_eq!(tasks[0].title, "x");
    assert_eq!(tasks[0].completed, 0);

    // Complete
    let response = server
        .put("/api/tasks/1")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"completed": true}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));
    assert_eq!(list_tasks(&server, &token).await[0].completed, 1);

    // Delete
    let response = server
        .delete("/api/tasks/1")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": true}));

    assert!(list_tasks(&server, &token).await.is_empty());
}

// ============================================================================
// Ancillary routes
// ============================================================================

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = create_test_server().await;

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc: Value = response.json();
    for path in ["/api/register", "/api/login", "/api/tasks", "/api/tasks/{id}"] {
        assert!(doc["paths"].get(path).is_some(), "missing {} in OpenAPI doc", path);
    }
}
