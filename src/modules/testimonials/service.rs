use anyhow::Context;
use sqlx::PgPool;

use super::model::Testimonial;
use crate::utils::errors::AppError;

pub struct TestimonialService;

impl TestimonialService {
    pub async fn list(db: &PgPool) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT id, name, email, review, rating, image FROM testimonials",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch testimonials")
        .map_err(AppError::database)
    }
}
