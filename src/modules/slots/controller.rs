use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use super::model::{CreateSlotDto, Slot};
use super::service::SlotService;
use crate::middleware::role::RequireTrainer;
use crate::modules::subscribers::controller::EmailQuery;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreatedResponse {
    pub inserted_ids: Vec<Uuid>,
}

/// Bulk slot creation by a trainer.
#[instrument(skip(state, trainer, slots))]
pub async fn add_slots(
    State(state): State<AppState>,
    RequireTrainer(trainer): RequireTrainer,
    Query(query): Query<EmailQuery>,
    Json(slots): Json<Vec<CreateSlotDto>>,
) -> Result<Json<BulkCreatedResponse>, AppError> {
    trainer.ensure_self(query.email.as_deref())?;

    if slots.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "No slots in request body"
        )));
    }

    let inserted_ids = SlotService::create_many(&state.db, slots).await?;
    Ok(Json(BulkCreatedResponse { inserted_ids }))
}

/// Public listing of a trainer's available slots, keyed by the trainer
/// application id.
#[instrument(skip(state))]
pub async fn get_trainer_slots(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = SlotService::list_available(&state.db, id).await?;
    Ok(Json(slots))
}

/// Everything the calling trainer has added.
#[instrument(skip(state, trainer))]
pub async fn get_my_added_slots(
    State(state): State<AppState>,
    RequireTrainer(trainer): RequireTrainer,
    Query(query): Query<EmailQuery>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Slot>>, AppError> {
    trainer.ensure_self(query.email.as_deref())?;
    let slots = SlotService::list_for_trainer(&state.db, &email).await?;
    Ok(Json(slots))
}

#[instrument(skip(state, trainer))]
pub async fn delete_slot(
    State(state): State<AppState>,
    RequireTrainer(trainer): RequireTrainer,
    Query(query): Query<EmailQuery>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    trainer.ensure_self(query.email.as_deref())?;
    SlotService::delete(&state.db, id, trainer.email()).await?;
    Ok(Json(MessageResponse {
        message: "Slot deleted".to_string(),
    }))
}
