//! Role-based authorization guards.
//!
//! Each guard is an extractor that composes [`AuthUser`] with a role lookup
//! against the `users` table: the token only proves identity, the stored
//! role decides authorization. Role mismatches answer 401 rather than 403;
//! the consuming frontend keys off that status code.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Pure predicate: the resolved role must equal the required one.
pub fn check_role(resolved: Option<&str>, required: UserRole) -> Result<(), AppError> {
    check_any_role(resolved, &[required])
}

/// Pure predicate: the resolved role must be one of the allowed roles.
/// An unknown user (no resolved role) never passes.
pub fn check_any_role(resolved: Option<&str>, allowed: &[UserRole]) -> Result<(), AppError> {
    let role = resolved
        .and_then(UserRole::parse)
        .ok_or_else(AppError::unauthorized)?;

    if !allowed.contains(&role) {
        return Err(AppError::unauthorized());
    }

    Ok(())
}

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[UserRole],
) -> Result<AuthUser, AppError> {
    let auth_user = AuthUser::from_request_parts(parts, state).await?;
    let role = UserService::find_role(&state.db, auth_user.email()).await?;
    check_any_role(role.as_deref(), allowed)?;
    Ok(auth_user)
}

/// Admits admins only.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = authorize(parts, state, &[UserRole::Admin]).await?;
        Ok(RequireAdmin(auth_user))
    }
}

/// Admits trainers only.
#[derive(Debug, Clone)]
pub struct RequireTrainer(pub AuthUser);

impl FromRequestParts<AppState> for RequireTrainer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = authorize(parts, state, &[UserRole::Trainer]).await?;
        Ok(RequireTrainer(auth_user))
    }
}

/// Admits admins or trainers.
#[derive(Debug, Clone)]
pub struct RequireAdminOrTrainer(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdminOrTrainer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = authorize(parts, state, &[UserRole::Admin, UserRole::Trainer]).await?;
        Ok(RequireAdminOrTrainer(auth_user))
    }
}
