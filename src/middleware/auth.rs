use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and provides the caller's claims.
///
/// Extraction fails with `401 Unauthorized` when the `Authorization` header
/// is missing, not a bearer token, or the token does not verify. No handler
/// logic runs past a failed extraction.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Self-check: the caller-supplied identity must equal the verified
    /// claim's email, so a valid token cannot be used to reach another
    /// identity's resources. A missing identity parameter also fails.
    pub fn ensure_self(&self, email: Option<&str>) -> Result<(), AppError> {
        match email {
            Some(email) if email == self.0.email => Ok(()),
            _ => Err(AppError::forbidden()),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(AppError::unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(AppError::unauthorized)?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_auth_user(email: &str) -> AuthUser {
        AuthUser(Claims {
            email: email.to_string(),
            name: Some("Test User".to_string()),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_ensure_self_matching_email() {
        let auth = test_auth_user("a@example.com");
        assert!(auth.ensure_self(Some("a@example.com")).is_ok());
    }

    #[test]
    fn test_ensure_self_mismatched_email_is_forbidden() {
        let auth = test_auth_user("a@example.com");
        let err = auth.ensure_self(Some("b@example.com")).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_ensure_self_missing_email_is_forbidden() {
        let auth = test_auth_user("a@example.com");
        let err = auth.ensure_self(None).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
