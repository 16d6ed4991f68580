use anyhow::Context;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use super::model::{
    ApplicationStatus, RejectApplicationDto, SubmitDecision, TeamTrainer, TrainerApplication,
    TrainerRequestDto, TrainerSummary, submit_decision,
};
use crate::utils::errors::AppError;

const APPLICATION_COLUMNS: &str = "id, email, name, image, biography, skills, experience, \
     available_days, available_time, age, status, feedback, applied_at";

/// Outcome of a trainer-application submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Created(Uuid),
    AlreadyTrainer,
    AlreadyRequested,
}

pub struct TrainerService;

impl TrainerService {
    pub async fn list_verified(db: &PgPool) -> Result<Vec<TrainerApplication>, AppError> {
        sqlx::query_as::<_, TrainerApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM trainer_applications WHERE status = 'verified'"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch verified trainers")
        .map_err(AppError::database)
    }

    /// Three verified trainers for the landing-page team strip.
    pub async fn list_team(db: &PgPool) -> Result<Vec<TeamTrainer>, AppError> {
        sqlx::query_as::<_, TeamTrainer>(
            r#"
            SELECT id, name, image, biography, skills, experience
            FROM trainer_applications
            WHERE status = 'verified'
            LIMIT 3
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch team trainers")
        .map_err(AppError::database)
    }

    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<TrainerApplication, AppError> {
        sqlx::query_as::<_, TrainerApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM trainer_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch trainer")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No trainer found for id {}", id)))
    }

    pub async fn get_by_email(db: &PgPool, email: &str) -> Result<TrainerApplication, AppError> {
        sqlx::query_as::<_, TrainerApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM trainer_applications WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch trainer by email")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("No trainer found for email {}", email))
        })
    }

    pub async fn list_verified_summaries(db: &PgPool) -> Result<Vec<TrainerSummary>, AppError> {
        sqlx::query_as::<_, TrainerSummary>(
            "SELECT id, email, name, status FROM trainer_applications WHERE status = 'verified'",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch trainer summaries")
        .map_err(AppError::database)
    }

    pub async fn list_pending(db: &PgPool) -> Result<Vec<TrainerApplication>, AppError> {
        sqlx::query_as::<_, TrainerApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM trainer_applications WHERE status = 'pending'"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch pending applications")
        .map_err(AppError::database)
    }

    /// Applications submitted by one member, for their activity log.
    pub async fn list_for_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<TrainerApplication>, AppError> {
        sqlx::query_as::<_, TrainerApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM trainer_applications WHERE email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .context("Failed to fetch applications for email")
        .map_err(AppError::database)
    }

    /// Submit a trainer application. A `pending` or `verified` application
    /// blocks the submission without mutation; a `rejected` one is
    /// replaced, keeping at most one application per email.
    pub async fn submit(db: &PgPool, dto: TrainerRequestDto) -> Result<SubmitOutcome, AppError> {
        let existing =
            sqlx::query_scalar::<_, String>("SELECT status FROM trainer_applications WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await
                .context("Failed to look up existing application")
                .map_err(AppError::database)?;

        match submit_decision(existing.as_deref().and_then(ApplicationStatus::parse)) {
            SubmitDecision::AlreadyTrainer => Ok(SubmitOutcome::AlreadyTrainer),
            SubmitDecision::AlreadyRequested => Ok(SubmitOutcome::AlreadyRequested),
            SubmitDecision::Insert => {
                let id = sqlx::query_scalar::<_, Uuid>(
                    r#"
                    INSERT INTO trainer_applications
                        (email, name, image, biography, skills, experience,
                         available_days, available_time, age, status)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending')
                    ON CONFLICT (email) DO UPDATE SET
                        name = EXCLUDED.name,
                        image = EXCLUDED.image,
                        biography = EXCLUDED.biography,
                        skills = EXCLUDED.skills,
                        experience = EXCLUDED.experience,
                        available_days = EXCLUDED.available_days,
                        available_time = EXCLUDED.available_time,
                        age = EXCLUDED.age,
                        status = 'pending',
                        feedback = NULL,
                        applied_at = now()
                    RETURNING id
                    "#,
                )
                .bind(&dto.email)
                .bind(&dto.name)
                .bind(&dto.image)
                .bind(&dto.biography)
                .bind(&dto.skills)
                .bind(&dto.experience)
                .bind(&dto.available_days)
                .bind(&dto.available_time)
                .bind(dto.age)
                .fetch_one(db)
                .await
                .context("Failed to insert trainer application")
                .map_err(AppError::database)?;

                Ok(SubmitOutcome::Created(id))
            }
        }
    }

    /// Approve an application: promote the user's role and mark the
    /// application verified as a single logical unit.
    pub async fn approve(db: &PgPool, email: &str) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let application = sqlx::query(
            "UPDATE trainer_applications SET status = 'verified' WHERE email = $1",
        )
        .bind(email)
        .execute(&mut *tx)
        .await
        .context("Failed to verify application")
        .map_err(AppError::database)?;

        if application.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No application found for email {}",
                email
            )));
        }

        let user = sqlx::query("UPDATE users SET role = 'trainer' WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await
            .context("Failed to promote user role")
            .map_err(AppError::database)?;

        if user.rows_affected() == 0 {
            error!(email, "application approved for an email with no user record");
            return Err(AppError::not_found(anyhow::anyhow!(
                "No user found for email {}",
                email
            )));
        }

        tx.commit().await.map_err(AppError::database)?;
        Ok(())
    }

    /// Reject an application, merging any admin-edited profile fields into
    /// the record. The user's role stays `member`.
    pub async fn reject(db: &PgPool, dto: &RejectApplicationDto) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE trainer_applications
            SET status = 'rejected',
                feedback = $2,
                name = COALESCE($3, name),
                image = COALESCE($4, image),
                biography = COALESCE($5, biography),
                skills = COALESCE($6, skills),
                experience = COALESCE($7, experience),
                available_days = COALESCE($8, available_days),
                available_time = COALESCE($9, available_time),
                age = COALESCE($10, age)
            WHERE email = $1
            "#,
        )
        .bind(&dto.email)
        .bind(&dto.feedback)
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.biography)
        .bind(&dto.skills)
        .bind(&dto.experience)
        .bind(&dto.available_days)
        .bind(&dto.available_time)
        .bind(dto.age)
        .execute(db)
        .await
        .context("Failed to reject application")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No application found for email {}",
                dto.email
            )));
        }

        Ok(())
    }

    /// Revoke trainer status: demote the user and delete the application,
    /// as a single logical unit.
    pub async fn revoke(db: &PgPool, email: &str) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query("UPDATE users SET role = 'member' WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await
            .context("Failed to demote user role")
            .map_err(AppError::database)?;

        let deleted = sqlx::query("DELETE FROM trainer_applications WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await
            .context("Failed to delete trainer application")
            .map_err(AppError::database)?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No trainer found for email {}",
                email
            )));
        }

        tx.commit().await.map_err(AppError::database)?;
        Ok(())
    }
}
