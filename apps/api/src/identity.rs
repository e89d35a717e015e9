//! Identity resolution — maps the caller identity forwarded by the session provider
//! to a domain `User`. Every pipeline operation resolves first; results are never cached.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::PgPool;
use std::convert::Infallible;

use crate::errors::AppError;
use crate::models::user::User;

/// Header carrying the opaque caller id, set by the upstream session provider.
pub const CALLER_ID_HEADER: &str = "x-user-id";

/// The opaque caller identity for one request. `None` when no session is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity(pub Option<String>);

impl CallerIdentity {
    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
impl CallerIdentity {
    pub fn authenticated(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

/// Never rejects: a missing or blank header becomes an anonymous identity, which
/// resolution turns into `Unauthorized`.
#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        Ok(CallerIdentity(id))
    }
}

/// Resolves a caller identity to a domain user.
///
/// Fails with `Unauthorized` when there is no caller identity, and with `UserNotFound`
/// when the identity has no matching user record.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, caller: &CallerIdentity) -> Result<User, AppError>;
}

/// Looks users up by external id in Postgres.
pub struct PgIdentityResolver {
    pool: PgPool,
}

impl PgIdentityResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for PgIdentityResolver {
    async fn resolve(&self, caller: &CallerIdentity) -> Result<User, AppError> {
        let external_id = caller.id().ok_or(AppError::Unauthorized)?;

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, industry, experience, skills, bio, created_at
            FROM users
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)
    }
}
