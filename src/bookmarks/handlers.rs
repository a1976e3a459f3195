use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::bookmarks::dto::{CreateBookmarkRequest, EditBookmarkRequest};
use crate::bookmarks::repo::Bookmark;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = Bookmark::list_by_user(&state.db, user_id).await?;
    Ok(Json(bookmarks))
}

/// Owner-scoped get: absent and not-yours both answer with a null body.
#[instrument(skip(state))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Bookmark>>, ApiError> {
    let bookmark = Bookmark::find_scoped(&state.db, user_id, id).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, payload))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("title should not be empty".into()));
    }
    if payload.link.trim().is_empty() {
        return Err(ApiError::Validation("link should not be empty".into()));
    }
    let bookmark = Bookmark::create(
        &state.db,
        user_id,
        &payload.title,
        payload.description.as_deref(),
        &payload.link,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state, payload))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    // Load first, then compare the owner: mutations answer 403 on a
    // mismatch instead of pretending the record is absent.
    let bookmark = Bookmark::find_by_id(&state.db, id).await?;
    match bookmark {
        Some(b) if b.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }

    let updated = Bookmark::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.link.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let bookmark = Bookmark::find_by_id(&state.db, id).await?;
    match bookmark {
        Some(b) if b.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }

    Bookmark::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
