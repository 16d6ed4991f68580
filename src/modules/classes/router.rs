use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_class, get_class_names, get_classes, get_featured_classes};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/classes", get(get_classes))
        .route("/featured-classes", get(get_featured_classes))
        .route("/classes-name", get(get_class_names))
        .route("/add-class", post(add_class))
}
