use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::categories::dto::{CategoryFilter, CreateCategoryRequest, EditCategoryRequest};
use crate::categories::repo::Category;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(filter): Query<CategoryFilter>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories =
        Category::list_by_user(&state.db, user_id, filter.kind, filter.is_active).await?;
    Ok(Json(categories))
}

#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Category>>, ApiError> {
    let category = Category::find_scoped(&state.db, user_id, id).await?;
    Ok(Json(category))
}

#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("name should not be empty".into()));
    }
    let category = Category::create(
        &state.db,
        user_id,
        &payload.name,
        payload.description.as_deref(),
        payload.color.as_deref(),
        payload.icon.as_deref(),
        payload.kind,
        &payload.keywords,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, payload))]
pub async fn edit_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<EditCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = Category::find_by_id(&state.db, id).await?;
    match category {
        Some(c) if c.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }

    let updated = Category::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.color.as_deref(),
        payload.icon.as_deref(),
        payload.kind,
        payload.keywords.as_deref(),
        payload.is_active,
    )
    .await?;
    Ok(Json(updated))
}

/// Soft delete; dependent transactions keep their category reference.
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let category = Category::find_by_id(&state.db, id).await?;
    match category {
        Some(c) if c.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }

    Category::deactivate(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
