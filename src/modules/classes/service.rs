use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{ClassName, ClassOffering, ClassWithTrainers, ClassesPage, CreateClassDto, MatchedTrainer};
use crate::utils::errors::AppError;
use crate::utils::pagination::PageParams;

pub struct ClassService;

impl ClassService {
    /// One catalog page, each class joined with the verified trainers
    /// whose skills include the class name.
    pub async fn list_page(db: &PgPool, page: &PageParams) -> Result<ClassesPage, AppError> {
        let totalclass = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes")
            .fetch_one(db)
            .await
            .context("Failed to count classes")
            .map_err(AppError::database)?;

        let classes = sqlx::query_as::<_, ClassOffering>(
            r#"
            SELECT id, name, image, details, total_booking
            FROM classes
            ORDER BY name
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(db)
        .await
        .context("Failed to fetch classes page")
        .map_err(AppError::database)?;

        let mut result = Vec::with_capacity(classes.len());
        for class in classes {
            let matched_trainers = sqlx::query_as::<_, MatchedTrainer>(
                r#"
                SELECT id, image
                FROM trainer_applications
                WHERE status = 'verified' AND $1 = ANY(skills)
                "#,
            )
            .bind(&class.name)
            .fetch_all(db)
            .await
            .context("Failed to match trainers for class")
            .map_err(AppError::database)?;

            result.push(ClassWithTrainers {
                class,
                matched_trainers,
            });
        }

        Ok(ClassesPage { result, totalclass })
    }

    /// Six most booked classes.
    pub async fn list_featured(db: &PgPool) -> Result<Vec<ClassOffering>, AppError> {
        sqlx::query_as::<_, ClassOffering>(
            r#"
            SELECT id, name, image, details, total_booking
            FROM classes
            ORDER BY total_booking DESC
            LIMIT 6
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch featured classes")
        .map_err(AppError::database)
    }

    pub async fn list_names(db: &PgPool) -> Result<Vec<ClassName>, AppError> {
        sqlx::query_as::<_, ClassName>("SELECT name FROM classes")
            .fetch_all(db)
            .await
            .context("Failed to fetch class names")
            .map_err(AppError::database)
    }

    pub async fn create(db: &PgPool, dto: CreateClassDto) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO classes (name, image, details) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.details)
        .fetch_one(db)
        .await
        .context("Failed to insert class")
        .map_err(AppError::database)
    }
}
