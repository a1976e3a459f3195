use axum::{extract::State, Json};
use tracing::instrument;

use crate::auth::extractors::{AuthUser, CurrentUser};
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;
use crate::users::dto::{EditUserRequest, UserPublic};
use crate::users::repo::User;

/// The guard already loaded and sanitized the identity; just echo it.
#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserPublic> {
    Json(user)
}

#[instrument(skip(state, payload))]
pub async fn edit_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<EditUserRequest>,
) -> Result<Json<UserPublic>, ApiError> {
    let user = User::update_profile(
        &state.db,
        user_id,
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
    )
    .await?;
    Ok(Json(UserPublic::from(user)))
}
