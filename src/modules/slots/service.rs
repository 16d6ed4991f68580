use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{CreateSlotDto, Slot, SlotRow};
use crate::utils::errors::AppError;

const SLOT_COLUMNS: &str = "id, trainer_id, trainer_email, trainer_name, slot_name, slot_time, \
     class_name, status, booked_by_name, booked_by_email, created_at";

pub struct SlotService;

impl SlotService {
    /// Bulk insert of slots owned by one trainer. Slots start `available`;
    /// no overlap validation is performed.
    pub async fn create_many(
        db: &PgPool,
        slots: Vec<CreateSlotDto>,
    ) -> Result<Vec<Uuid>, AppError> {
        let mut ids = Vec::with_capacity(slots.len());
        let mut tx = db.begin().await.map_err(AppError::database)?;

        for slot in &slots {
            let id = sqlx::query_scalar::<_, Uuid>(
                r#"
                INSERT INTO slots
                    (trainer_id, trainer_email, trainer_name, slot_name, slot_time, class_name)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(slot.trainer.id)
            .bind(&slot.trainer.email)
            .bind(&slot.trainer.name)
            .bind(&slot.slot_name)
            .bind(&slot.slot_time)
            .bind(&slot.class_name)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to insert slot")
            .map_err(AppError::database)?;

            ids.push(id);
        }

        tx.commit().await.map_err(AppError::database)?;
        Ok(ids)
    }

    /// Public listing of a trainer's open slots.
    pub async fn list_available(db: &PgPool, trainer_id: Uuid) -> Result<Vec<Slot>, AppError> {
        let rows = sqlx::query_as::<_, SlotRow>(&format!(
            "SELECT {SLOT_COLUMNS} FROM slots WHERE trainer_id = $1 AND status = 'available'"
        ))
        .bind(trainer_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch available slots")
        .map_err(AppError::database)?;

        Ok(rows.into_iter().map(Slot::from).collect())
    }

    /// All slots a trainer has added, booked or not.
    pub async fn list_for_trainer(db: &PgPool, email: &str) -> Result<Vec<Slot>, AppError> {
        let rows = sqlx::query_as::<_, SlotRow>(&format!(
            "SELECT {SLOT_COLUMNS} FROM slots WHERE trainer_email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .context("Failed to fetch trainer slots")
        .map_err(AppError::database)?;

        Ok(rows.into_iter().map(Slot::from).collect())
    }

    /// Delete a slot, but only one the calling trainer owns. A foreign or
    /// unknown slot id answers 404.
    pub async fn delete(db: &PgPool, id: Uuid, trainer_email: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1 AND trainer_email = $2")
            .bind(id)
            .bind(trainer_email)
            .execute(db)
            .await
            .context("Failed to delete slot")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No slot {} owned by {}",
                id,
                trainer_email
            )));
        }

        Ok(())
    }
}
