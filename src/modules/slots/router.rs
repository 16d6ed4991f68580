use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{add_slots, delete_slot, get_my_added_slots, get_trainer_slots};
use crate::state::AppState;

pub fn init_slots_router() -> Router<AppState> {
    Router::new()
        .route("/add-slot", post(add_slots))
        .route("/trainer-slots/{id}", get(get_trainer_slots))
        .route("/myadded-slots/{email}", get(get_my_added_slots))
        .route("/delete-slot/{id}", delete(delete_slot))
}
