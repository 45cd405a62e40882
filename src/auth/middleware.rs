// Authentication guard for protected routes

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::auth::{error::AuthError, service::AuthService};

/// Authenticated user extractor for protected routes
///
/// Adding `user: AuthenticatedUser` to a handler makes the route require
/// `Authorization: Bearer <token>`. A missing token is rejected with 401, a
/// bad or expired one with 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
///
/// `Ok(None)` means no usable token was sent at all, which includes a bare
/// value with no scheme. A header naming some other scheme counts as an
/// invalid token rather than a missing one.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidToken)?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("bearer") {
        return Ok(None);
    }

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(Some(token.trim())),
        Some(_) => Err(AuthError::InvalidToken),
        None => Ok(None),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let service = Arc::<AuthService>::from_ref(state);
        let token = bearer_token(&parts.headers)?;

        let user = service.verify(token)?;
        debug!("Authenticated user_id={} for {}", user.user_id, parts.uri.path());
        Ok(user)
    }
}
