use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{SubscribeDto, Subscriber};
use crate::utils::errors::AppError;

pub struct SubscriberService;

impl SubscriberService {
    /// Idempotent-by-email signup. `None` when the email already
    /// subscribed.
    pub async fn subscribe(db: &PgPool, dto: SubscribeDto) -> Result<Option<Uuid>, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM subscribers WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .context("Failed to look up subscriber")
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Ok(None);
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO subscribers (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .fetch_one(db)
        .await
        .context("Failed to insert subscriber")
        .map_err(AppError::database)?;

        Ok(Some(id))
    }

    pub async fn list(db: &PgPool) -> Result<Vec<Subscriber>, AppError> {
        sqlx::query_as::<_, Subscriber>("SELECT id, name, email FROM subscribers")
            .fetch_all(db)
            .await
            .context("Failed to fetch subscribers")
            .map_err(AppError::database)
    }
}
