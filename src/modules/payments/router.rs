use axum::{Router, routing::post};

use super::controller::{confirm_booking, create_payment_intent};
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/payment", post(confirm_booking))
        .route("/create-payment-intent", post(create_payment_intent))
}
