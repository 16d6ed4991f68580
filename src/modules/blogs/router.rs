use axum::{
    Router,
    routing::{get, patch, post},
};

use super::controller::{add_blog, get_blog, get_blogs, get_community, vote_blog};
use crate::state::AppState;

pub fn init_blogs_router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(get_blogs))
        .route("/blog/{id}", get(get_blog))
        .route("/community", get(get_community))
        .route("/add-blog", post(add_blog))
        .route("/voteBlog", patch(vote_blog))
}
