use axum::{Json, extract::State};
use tracing::instrument;

use super::model::Testimonial;
use super::service::TestimonialService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[instrument(skip(state))]
pub async fn get_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = TestimonialService::list(&state.db).await?;
    Ok(Json(testimonials))
}
