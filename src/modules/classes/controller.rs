use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use super::model::{ClassName, ClassOffering, ClassesPage, CreateClassDto};
use super::service::ClassService;
use crate::middleware::role::RequireAdmin;
use crate::modules::subscribers::controller::EmailQuery;
use crate::modules::users::model::CreatedResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PageParams;
use crate::validator::ValidatedJson;

#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<ClassesPage>, AppError> {
    let classes = ClassService::list_page(&state.db, &page).await?;
    Ok(Json(classes))
}

#[instrument(skip(state))]
pub async fn get_featured_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassOffering>>, AppError> {
    let classes = ClassService::list_featured(&state.db).await?;
    Ok(Json(classes))
}

#[instrument(skip(state))]
pub async fn get_class_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassName>>, AppError> {
    let names = ClassService::list_names(&state.db).await?;
    Ok(Json(names))
}

#[instrument(skip(state, admin))]
pub async fn add_class(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<EmailQuery>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<Json<CreatedResponse>, AppError> {
    admin.ensure_self(query.email.as_deref())?;
    let id = ClassService::create(&state.db, dto).await?;
    Ok(Json(CreatedResponse { inserted_id: id }))
}
