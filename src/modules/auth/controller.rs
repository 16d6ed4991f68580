use axum::{Json, extract::State};
use tracing::instrument;

use super::model::{TokenRequest, TokenResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::validator::ValidatedJson;

/// Issue a bearer token binding the posted identity to a time-limited
/// session. Signing has no side effects; users are persisted separately
/// through `POST /users`.
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = create_access_token(&dto.email, dto.name.as_deref(), &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
