use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::CreateUserDto;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Insert-if-absent keyed by email. Returns `None` when the user
    /// already exists; nothing is mutated in that case.
    pub async fn create_if_absent(
        db: &PgPool,
        dto: CreateUserDto,
    ) -> Result<Option<Uuid>, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .context("Failed to look up user by email")
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Ok(None);
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (name, email, photo)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo)
        .fetch_one(db)
        .await
        .context("Failed to insert user")
        .map_err(AppError::database)?;

        Ok(Some(id))
    }

    /// Role resolver used by the authorization guards. `None` for an
    /// unknown email.
    pub async fn find_role(db: &PgPool, email: &str) -> Result<Option<String>, AppError> {
        sqlx::query_scalar::<_, String>("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await
            .context("Failed to resolve user role")
            .map_err(AppError::database)
    }

    /// Role lookup for the public endpoint; unknown email is 404 rather
    /// than a crash on a missing document.
    pub async fn get_role(db: &PgPool, email: &str) -> Result<String, AppError> {
        Self::find_role(db, email).await?.ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("No user found for email {}", email))
        })
    }
}
