use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{Blog, BlogPreview, CommunityPage, CreateBlogDto};
use crate::utils::errors::AppError;
use crate::utils::pagination::PageParams;

pub struct BlogService;

impl BlogService {
    /// Public strip on the landing page: six most recent posts, projected.
    pub async fn list_previews(db: &PgPool) -> Result<Vec<BlogPreview>, AppError> {
        sqlx::query_as::<_, BlogPreview>(
            r#"
            SELECT id, title, author, post_date, image, description
            FROM blogs
            ORDER BY post_date DESC
            LIMIT 6
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch blog previews")
        .map_err(AppError::database)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, author, author_image, post_date, image,
                   description, likes, dislikes
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch blog")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No blog found for id {}", id)))
    }

    /// Paginated community feed with the total count, so the caller can
    /// compute the number of pages.
    pub async fn community_page(db: &PgPool, page: &PageParams) -> Result<CommunityPage, AppError> {
        let total_blogs = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(db)
            .await
            .context("Failed to count blogs")
            .map_err(AppError::database)?;

        let blogs = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, author, author_image, post_date, image,
                   description, likes, dislikes
            FROM blogs
            ORDER BY post_date DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(db)
        .await
        .context("Failed to fetch community page")
        .map_err(AppError::database)?;

        Ok(CommunityPage { blogs, total_blogs })
    }

    pub async fn create(db: &PgPool, dto: CreateBlogDto) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO blogs (title, author, author_image, image, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.author)
        .bind(&dto.author_image)
        .bind(&dto.image)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .context("Failed to insert blog")
        .map_err(AppError::database)
    }

    /// Increment likes when the vote is `"like"`, dislikes otherwise.
    pub async fn vote(db: &PgPool, id: Uuid, vote: &str) -> Result<(), AppError> {
        let query = if vote == "like" {
            "UPDATE blogs SET likes = likes + 1 WHERE id = $1"
        } else {
            "UPDATE blogs SET dislikes = dislikes + 1 WHERE id = $1"
        };

        let result = sqlx::query(query)
            .bind(id)
            .execute(db)
            .await
            .context("Failed to record vote")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No blog found for id {}",
                id
            )));
        }

        Ok(())
    }
}
