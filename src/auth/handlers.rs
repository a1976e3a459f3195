use axum::{extract::FromRef, extract::State, http::StatusCode, Json};
use tracing::instrument;

use crate::auth::dto::{AuthRequest, ChangePasswordRequest, MessageResponse, TokenResponse};
use crate::auth::extractors::AuthUser;
use crate::auth::jwt::JwtKeys;
use crate::auth::services;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let token = services::signup(&state.db, &keys, payload).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let token = services::signin(&state.db, &keys, payload).await?;
    Ok(Json(token))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let confirmation = services::change_password(&state.db, user_id, payload).await?;
    Ok(Json(confirmation))
}
