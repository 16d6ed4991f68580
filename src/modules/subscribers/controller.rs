use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use super::model::{SubscribeDto, Subscriber};
use super::service::SubscriberService;
use crate::middleware::role::RequireAdmin;
use crate::modules::users::model::{CreatedResponse, MessageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[instrument(skip(state))]
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SubscribeDto>,
) -> Result<Response, AppError> {
    match SubscriberService::subscribe(&state.db, dto).await? {
        Some(id) => Ok(Json(CreatedResponse { inserted_id: id }).into_response()),
        None => Ok(Json(MessageResponse {
            message: "Already subscribes".to_string(),
        })
        .into_response()),
    }
}

/// Admin listing of all newsletter subscribers.
#[instrument(skip(state, admin))]
pub async fn get_newsletters(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Subscriber>>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    let subscribers = SubscriberService::list(&state.db).await?;
    Ok(Json(subscribers))
}
