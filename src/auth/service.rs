// Authentication service - business logic layer

use std::sync::Arc;

use crate::auth::{
    error::AuthError, middleware::AuthenticatedUser, password::PasswordService,
    repository::UserRepository, token::TokenService,
};

/// Authentication service coordinating all auth operations
pub struct AuthService {
    user_repo: UserRepository,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user
    ///
    /// The password is hashed on the blocking pool; Argon2 is deliberately slow.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let password = password.to_owned();
        let password_hash =
            tokio::task::spawn_blocking(move || PasswordService::hash_password(&password))
                .await
                .map_err(|e| AuthError::PasswordHash(e.to_string()))??;

        let user = self.user_repo.create_user(username, &password_hash).await?;

        tracing::info!("Registered user id={} username={}", user.id, user.username);
        Ok(())
    }

    /// Login a user and mint a session token
    ///
    /// An unknown username and a wrong password produce the same error after
    /// the same amount of hashing work.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self.user_repo.find_by_username(username).await?;

        let password = password.to_owned();
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let valid = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => PasswordService::verify_password(&password, &hash),
            None => {
                // Burn the same Argon2 time, then fail regardless
                let _ = PasswordService::verify_password(&password, PasswordService::dummy_hash());
                Ok(false)
            }
        })
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))??;

        let user = match user {
            Some(user) if valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.token_service.generate_token(user.id, &user.username)?;
        tracing::info!("User id={} logged in", user.id);
        Ok(token)
    }

    /// Resolve a bearer token into the identity it was issued for
    pub fn verify(&self, token: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let token = token.filter(|t| !t.is_empty()).ok_or(AuthError::MissingToken)?;
        let claims = self.token_service.validate_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id()?,
            username: claims.username,
        })
    }
}
