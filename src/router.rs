use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::blogs::router::init_blogs_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::payments::router::init_payments_router;
use crate::modules::slots::router::init_slots_router;
use crate::modules::subscribers::router::init_subscribers_router;
use crate::modules::testimonials::router::init_testimonials_router;
use crate::modules::trainers::router::init_trainers_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

async fn liveness() -> &'static str {
    "FitVessel server is running"
}

/// Routes are mounted flat at the root rather than nested per module; the
/// frontend consumes them unprefixed.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .merge(init_auth_router())
        .merge(init_users_router())
        .merge(init_testimonials_router())
        .merge(init_subscribers_router())
        .merge(init_blogs_router())
        .merge(init_trainers_router())
        .merge(init_classes_router())
        .merge(init_slots_router())
        .merge(init_payments_router())
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
