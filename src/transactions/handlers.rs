use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::categories::repo::Category;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;
use crate::transactions::dto::{
    CreateTransactionRequest, EditTransactionRequest, TransactionResponse,
};
use crate::transactions::repo::Transaction;

/// A transaction may only reference the caller's own categories. Someone
/// else's category id gets the same answer as a nonexistent one.
async fn ensure_owned_category(
    db: &sqlx::PgPool,
    user_id: Uuid,
    category_id: Option<Uuid>,
) -> Result<(), ApiError> {
    if let Some(id) = category_id {
        if Category::find_scoped(db, user_id, id).await?.is_none() {
            return Err(ApiError::AccessDenied);
        }
    }
    Ok(())
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let rows = Transaction::list_by_user(&state.db, user_id).await?;
    let items = rows
        .into_iter()
        .map(|row| {
            let (t, category) = row.split();
            TransactionResponse::from_parts(t, category)
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<TransactionResponse>>, ApiError> {
    let row = Transaction::find_scoped(&state.db, user_id, id).await?;
    Ok(Json(row.map(|r| {
        let (t, category) = r.split();
        TransactionResponse::from_parts(t, category)
    })))
}

#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    if payload.description.trim().is_empty() {
        return Err(ApiError::Validation("description should not be empty".into()));
    }
    ensure_owned_category(&state.db, user_id, payload.category).await?;

    let transaction = Transaction::create(
        &state.db,
        user_id,
        payload.amount,
        &payload.description,
        payload.kind,
        payload.category,
    )
    .await?;

    let category = match transaction.category_id {
        Some(cat_id) => Category::find_by_id(&state.db, cat_id).await?,
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse::from_parts(transaction, category)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn edit_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<EditTransactionRequest>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = Transaction::find_by_id(&state.db, id).await?;
    match transaction {
        Some(t) if t.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }
    ensure_owned_category(&state.db, user_id, payload.category).await?;

    let updated = Transaction::update(
        &state.db,
        id,
        payload.amount,
        payload.description.as_deref(),
        payload.kind,
        payload.category,
    )
    .await?;
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let transaction = Transaction::find_by_id(&state.db, id).await?;
    match transaction {
        Some(t) if t.user_id == user_id => {}
        _ => return Err(ApiError::AccessDenied),
    }

    Transaction::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
