// Typed HTTP client for the task tracker API

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use crate::auth::LoginResponse;
use crate::error::ErrorResponse;
use crate::tasks::{CreatedTaskResponse, TaskResponse};

/// Errors surfaced by [`TaskClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an `{"error": ...}` body
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The server answered with a non-success status and no readable error body
    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status behind the error, when the server was reached
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status(status) => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

/// Async client for the `/api` routes
///
/// Holds no session state: the token returned by [`TaskClient::login`] is
/// passed back into each task call.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    http: reqwest::Client,
}

impl TaskClient {
    /// `base_url` is the server root, e.g. `http://localhost:4000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let body = json!({"username": username, "password": password});
        self.send::<serde_json::Value>(self.request(Method::POST, "/api/register", None).json(&body))
            .await?;
        Ok(())
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let body = json!({"username": username, "password": password});
        let response: LoginResponse = self
            .send(self.request(Method::POST, "/api/login", None).json(&body))
            .await?;
        Ok(response.token)
    }

    pub async fn list_tasks(&self, token: &str) -> Result<Vec<TaskResponse>, ClientError> {
        self.send(self.request(Method::GET, "/api/tasks", Some(token)))
            .await
    }

    pub async fn add_task(&self, token: &str, title: &str) -> Result<CreatedTaskResponse, ClientError> {
        self.send_json(Method::POST, "/api/tasks", token, &json!({ "title": title }))
            .await
    }

    pub async fn update_task(&self, token: &str, id: i64, completed: bool) -> Result<(), ClientError> {
        let path = format!("/api/tasks/{}", id);
        self.send_json::<serde_json::Value, _>(Method::PUT, &path, token, &json!({ "completed": completed }))
            .await?;
        Ok(())
    }

    pub async fn delete_task(&self, token: &str, id: i64) -> Result<(), ClientError> {
        let path = format!("/api/tasks/{}", id);
        self.send::<serde_json::Value>(self.request(Method::DELETE, &path, Some(token)))
            .await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, token: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(method, path, Some(token)).json(body))
            .await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(ClientError::Api {
                status,
                message: body.error,
            }),
            Err(_) => Err(ClientError::Status(status)),
        }
    }
}
