use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_user, get_user_role};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/user/role/{email}", get(get_user_role))
}
