use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use super::controller::{
    accept_applied_trainer, delete_trainer, get_active_logs, get_applied_trainer_details,
    get_applied_trainers, get_teams, get_trainer_details, get_trainer_profile, get_trainers,
    get_trainers_dashboard, reject_applied_trainer, request_trainer,
};
use crate::state::AppState;

pub fn init_trainers_router() -> Router<AppState> {
    Router::new()
        .route("/trainers", get(get_trainers))
        .route("/teams", get(get_teams))
        .route("/trainer-details/{id}", get(get_trainer_details))
        .route("/trainer-request", post(request_trainer))
        .route("/trainers-db", get(get_trainers_dashboard))
        .route("/appliedTrainers", get(get_applied_trainers))
        .route(
            "/applied-trainer-details/{id}",
            get(get_applied_trainer_details),
        )
        .route("/updateAppliedTrainersAccept", patch(accept_applied_trainer))
        .route("/updateAppliedTrainersReject", patch(reject_applied_trainer))
        .route("/trainer-delete/{email}", delete(delete_trainer))
        .route("/trainer/{email}", get(get_trainer_profile))
        .route("/active-logs/{email}", get(get_active_logs))
}
