use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use super::model::{
    ApproveApplicationDto, RejectApplicationDto, TeamTrainer, TrainerApplication,
    TrainerRequestDto, TrainerSummary,
};
use super::service::{SubmitOutcome, TrainerService};
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, RequireTrainer};
use crate::modules::subscribers::controller::EmailQuery;
use crate::modules::users::model::{CreatedResponse, MessageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[instrument(skip(state))]
pub async fn get_trainers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainerApplication>>, AppError> {
    let trainers = TrainerService::list_verified(&state.db).await?;
    Ok(Json(trainers))
}

#[instrument(skip(state))]
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamTrainer>>, AppError> {
    let team = TrainerService::list_team(&state.db).await?;
    Ok(Json(team))
}

#[instrument(skip(state))]
pub async fn get_trainer_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrainerApplication>, AppError> {
    let trainer = TrainerService::get_by_id(&state.db, id).await?;
    Ok(Json(trainer))
}

/// A member asks to become a trainer. Submitting on top of a pending or
/// verified application is a no-op answered with a message.
#[instrument(skip(state, auth_user))]
pub async fn request_trainer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
    ValidatedJson(dto): ValidatedJson<TrainerRequestDto>,
) -> Result<Response, AppError> {
    auth_user.ensure_self(query.email.as_deref())?;

    match TrainerService::submit(&state.db, dto).await? {
        SubmitOutcome::Created(id) => Ok(Json(CreatedResponse { inserted_id: id }).into_response()),
        SubmitOutcome::AlreadyTrainer => Ok(Json(MessageResponse {
            message: "You are already a trainer.".to_string(),
        })
        .into_response()),
        SubmitOutcome::AlreadyRequested => Ok(Json(MessageResponse {
            message: "Already requested, please wait for admin approval.".to_string(),
        })
        .into_response()),
    }
}

#[instrument(skip(state, admin))]
pub async fn get_trainers_dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<TrainerSummary>>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    let trainers = TrainerService::list_verified_summaries(&state.db).await?;
    Ok(Json(trainers))
}

#[instrument(skip(state, admin))]
pub async fn get_applied_trainers(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<TrainerApplication>>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    let applications = TrainerService::list_pending(&state.db).await?;
    Ok(Json(applications))
}

#[instrument(skip(state, _admin))]
pub async fn get_applied_trainer_details(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<TrainerApplication>, AppError> {
    let application = TrainerService::get_by_id(&state.db, id).await?;
    Ok(Json(application))
}

#[instrument(skip(state, admin))]
pub async fn accept_applied_trainer(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
    ValidatedJson(dto): ValidatedJson<ApproveApplicationDto>,
) -> Result<Json<MessageResponse>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    TrainerService::approve(&state.db, &dto.email).await?;
    Ok(Json(MessageResponse {
        message: "Application approved".to_string(),
    }))
}

#[instrument(skip(state, admin))]
pub async fn reject_applied_trainer(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
    ValidatedJson(dto): ValidatedJson<RejectApplicationDto>,
) -> Result<Json<MessageResponse>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    TrainerService::reject(&state.db, &dto).await?;
    Ok(Json(MessageResponse {
        message: "Application rejected".to_string(),
    }))
}

#[instrument(skip(state, admin))]
pub async fn delete_trainer(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    TrainerService::revoke(&state.db, &email).await?;
    Ok(Json(MessageResponse {
        message: "Trainer removed".to_string(),
    }))
}

/// Trainer self profile.
#[instrument(skip(state, trainer))]
pub async fn get_trainer_profile(
    State(state): State<AppState>,
    RequireTrainer(trainer): RequireTrainer,
    Query(query): Query<EmailQuery>,
    Path(email): Path<String>,
) -> Result<Json<TrainerApplication>, AppError> {
    trainer.ensure_self(query.email.as_deref())?;
    let profile = TrainerService::get_by_email(&state.db, &email).await?;
    Ok(Json(profile))
}

/// A member's own application history.
#[instrument(skip(state, auth_user))]
pub async fn get_active_logs(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
    Path(email): Path<String>,
) -> Result<Json<Vec<TrainerApplication>>, AppError> {
    auth_user.ensure_self(query.email.as_deref())?;
    let applications = TrainerService::list_for_email(&state.db, &email).await?;
    Ok(Json(applications))
}
