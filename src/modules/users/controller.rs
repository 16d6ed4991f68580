use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use super::model::{CreateUserDto, CreatedResponse, MessageResponse};
use super::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Save a user on first sign-in. Re-posting a known email is an
/// idempotent no-op answered with a message payload.
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Response, AppError> {
    match UserService::create_if_absent(&state.db, dto).await? {
        Some(id) => Ok(Json(CreatedResponse { inserted_id: id }).into_response()),
        None => Ok(Json(MessageResponse {
            message: "User already exists!".to_string(),
        })
        .into_response()),
    }
}

/// Return the role string for an email; 404 when the email is unknown.
#[instrument(skip(state))]
pub async fn get_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<String>, AppError> {
    let role = UserService::get_role(&state.db, &email).await?;
    Ok(Json(role))
}
