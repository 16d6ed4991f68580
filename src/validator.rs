//! JSON body extraction with validation.
//!
//! Request DTOs derive `validator::Validate`; handlers take
//! [`ValidatedJson<T>`] instead of `Json<T>` so rule violations are
//! rejected before any service code runs. Failures use the same
//! `{"message": ...}` body as every other error in this API: 400 for a
//! body that does not deserialize, 422 for one that breaks a rule.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// One clause per offending field, sorted for a stable message.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, _)| format!("Invalid {field}"))
        .collect();
    parts.sort_unstable();
    parts.join(", ")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::new(
                    StatusCode::BAD_REQUEST,
                    anyhow::anyhow!("{}", rejection.body_text()),
                )
            })?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow::anyhow!("{}", describe(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::TokenRequest;
    use axum::body::Body;
    use axum::http::{Request, header};

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let req = json_request(r#"{"email":"user@example.com","name":"User"}"#);
        let extracted = ValidatedJson::<TokenRequest>::from_request(req, &()).await;
        assert_eq!(extracted.unwrap().0.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_rule_violation_is_unprocessable() {
        let req = json_request(r#"{"email":"not-an-email"}"#);
        let err = ValidatedJson::<TokenRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error.to_string(), "Invalid email");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let req = json_request("{not json");
        let err = ValidatedJson::<TokenRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"email":"user@example.com"}"#))
            .unwrap();
        let err = ValidatedJson::<TokenRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
