use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use super::model::{Blog, BlogPreview, CommunityPage, CreateBlogDto, VoteBlogDto};
use super::service::BlogService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdminOrTrainer;
use crate::modules::subscribers::controller::EmailQuery;
use crate::modules::users::model::{CreatedResponse, MessageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PageParams;
use crate::validator::ValidatedJson;

#[instrument(skip(state))]
pub async fn get_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogPreview>>, AppError> {
    let blogs = BlogService::list_previews(&state.db).await?;
    Ok(Json(blogs))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::get(&state.db, id).await?;
    Ok(Json(blog))
}

#[instrument(skip(state))]
pub async fn get_community(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<CommunityPage>, AppError> {
    let community = BlogService::community_page(&state.db, &page).await?;
    Ok(Json(community))
}

/// Blogs are written by admins and trainers.
#[instrument(skip(state, author))]
pub async fn add_blog(
    State(state): State<AppState>,
    RequireAdminOrTrainer(author): RequireAdminOrTrainer,
    Query(query): Query<EmailQuery>,
    ValidatedJson(dto): ValidatedJson<CreateBlogDto>,
) -> Result<Json<CreatedResponse>, AppError> {
    author.ensure_self(query.email.as_deref())?;
    let id = BlogService::create(&state.db, dto).await?;
    Ok(Json(CreatedResponse { inserted_id: id }))
}

#[instrument(skip(state, _auth_user))]
pub async fn vote_blog(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<VoteBlogDto>,
) -> Result<Json<MessageResponse>, AppError> {
    BlogService::vote(&state.db, dto.id, &dto.vote).await?;
    Ok(Json(MessageResponse {
        message: "Vote recorded".to_string(),
    }))
}
