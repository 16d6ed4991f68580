use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_newsletters, subscribe};
use crate::state::AppState;

pub fn init_subscribers_router() -> Router<AppState> {
    Router::new()
        .route("/subscribes", post(subscribe))
        .route("/newsletters", get(get_newsletters))
}
