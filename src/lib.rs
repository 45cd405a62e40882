//! Multi-user task tracker backend.
//!
//! Users register with a username and password, log in for a 24 hour bearer
//! token, and manage a private list of tasks. Every task query is scoped to
//! the user id inside the verified token.

pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod tasks;
pub mod validation;

use std::sync::Arc;

use axum::extract::FromRef;

use auth::{AuthService, TokenService, UserRepository};
use config::Config;
use db::DbPool;
use tasks::{TaskRepository, TaskService};

pub use routes::{cors_layer, create_router};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub task_service: Arc<TaskService>,
}

impl AppState {
    /// Wire repositories and services on top of one pool
    pub fn new(pool: DbPool, token_service: TokenService) -> Self {
        let auth_service = AuthService::new(UserRepository::new(pool.clone()), Arc::new(token_service));
        let task_service = TaskService::new(TaskRepository::new(pool));

        Self {
            auth_service: Arc::new(auth_service),
            task_service: Arc::new(task_service),
        }
    }

    /// Build state using the signing secret and token lifetime from `config`
    pub fn from_config(pool: DbPool, config: &Config) -> Self {
        Self::new(
            pool,
            TokenService::new(&config.jwt_secret, config.token_ttl_hours),
        )
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth_service.clone()
    }
}

#[cfg(test)]
mod tests;
