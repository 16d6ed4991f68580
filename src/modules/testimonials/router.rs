use axum::{Router, routing::get};

use super::controller::get_testimonials;
use crate::state::AppState;

pub fn init_testimonials_router() -> Router<AppState> {
    Router::new().route("/testimonials", get(get_testimonials))
}
