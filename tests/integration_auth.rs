//! Guard behavior over the wire. Every request here is rejected before the
//! handler touches the database, so these run against a lazy pool with no
//! live Postgres behind it.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fitvessel::router::init_router;

mod common;

use common::{expired_token_for, test_state, token_for};

async fn body_message(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    json["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_missing_authorization_header_is_unauthorized() {
    let app = init_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/newsletters?email=admin@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_message(response).await, "Unauthorized Access");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = init_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/newsletters?email=admin@example.com")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let app = init_router(test_state());
    let token = token_for("member@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/newsletters?email=member@example.com")
                .header(header::AUTHORIZATION, format!("Basic {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = init_router(test_state());
    let token = expired_token_for("member@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/newsletters?email=member@example.com")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mismatched_query_email_is_forbidden() {
    let app = init_router(test_state());
    let token = token_for("member@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent?email=other@example.com")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"price": 25.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_message(response).await, "Forbidden Access");
}

#[tokio::test]
async fn test_missing_query_email_is_forbidden() {
    let app = init_router(test_state());
    let token = token_for("member@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"price": 25.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_liveness_is_public() {
    let app = init_router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
