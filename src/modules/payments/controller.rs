use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use super::model::{ConfirmBookingDto, PaymentIntentRequest, PaymentIntentResponse};
use super::service::PaymentService;
use crate::middleware::auth::AuthUser;
use crate::modules::subscribers::controller::EmailQuery;
use crate::modules::users::model::CreatedResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Finalize a booking after the charge succeeds: counts the booking against
/// the class, takes the slot, and records the payment.
#[instrument(skip(state, user, dto))]
pub async fn confirm_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<EmailQuery>,
    Json(dto): Json<ConfirmBookingDto>,
) -> Result<Json<CreatedResponse>, AppError> {
    user.ensure_self(query.email.as_deref())?;
    let inserted_id = PaymentService::confirm_booking(&state.db, dto).await?;
    Ok(Json(CreatedResponse { inserted_id }))
}

#[instrument(skip(state, user, body))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<EmailQuery>,
    ValidatedJson(body): ValidatedJson<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    user.ensure_self(query.email.as_deref())?;
    let client_secret =
        PaymentService::create_intent(&state.http, &state.stripe_config, body.price).await?;
    Ok(Json(PaymentIntentResponse { client_secret }))
}
