use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::categories::repo::{Category, FinanceType};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    pub category_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Flat LEFT JOIN row; the category columns are all null when the
/// transaction has no category.
#[derive(Debug, FromRow)]
pub struct TransactionJoinRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: String,
    pub kind: FinanceType,
    pub category_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub cat_id: Option<Uuid>,
    pub cat_user_id: Option<Uuid>,
    pub cat_name: Option<String>,
    pub cat_description: Option<String>,
    pub cat_color: Option<String>,
    pub cat_icon: Option<String>,
    pub cat_kind: Option<FinanceType>,
    pub cat_keywords: Option<Vec<String>>,
    pub cat_is_active: Option<bool>,
    pub cat_created_at: Option<OffsetDateTime>,
    pub cat_updated_at: Option<OffsetDateTime>,
}

impl TransactionJoinRow {
    pub fn split(self) -> (Transaction, Option<Category>) {
        let category = match (
            self.cat_id,
            self.cat_user_id,
            self.cat_name,
            self.cat_kind,
            self.cat_is_active,
            self.cat_created_at,
            self.cat_updated_at,
        ) {
            (Some(id), Some(user_id), Some(name), Some(kind), Some(is_active), Some(created_at), Some(updated_at)) => {
                Some(Category {
                    id,
                    user_id,
                    name,
                    description: self.cat_description,
                    color: self.cat_color,
                    icon: self.cat_icon,
                    kind,
                    keywords: self.cat_keywords.unwrap_or_default(),
                    is_active,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };
        (
            Transaction {
                id: self.id,
                user_id: self.user_id,
                amount: self.amount,
                description: self.description,
                kind: self.kind,
                category_id: self.category_id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            category,
        )
    }
}

const COLUMNS: &str =
    "id, user_id, amount, description, kind, category_id, created_at, updated_at";

const JOINED: &str = "t.id, t.user_id, t.amount, t.description, t.kind, t.category_id,
       t.created_at, t.updated_at,
       c.id AS cat_id, c.user_id AS cat_user_id, c.name AS cat_name,
       c.description AS cat_description, c.color AS cat_color, c.icon AS cat_icon,
       c.kind AS cat_kind, c.keywords AS cat_keywords, c.is_active AS cat_is_active,
       c.created_at AS cat_created_at, c.updated_at AS cat_updated_at";

impl Transaction {
    /// Newest first, with category details attached.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<TransactionJoinRow>> {
        sqlx::query_as::<_, TransactionJoinRow>(&format!(
            "SELECT {JOINED}
             FROM transactions t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE t.user_id = $1
             ORDER BY t.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn find_scoped(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> sqlx::Result<Option<TransactionJoinRow>> {
        sqlx::query_as::<_, TransactionJoinRow>(&format!(
            "SELECT {JOINED}
             FROM transactions t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE t.id = $1 AND t.user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Transaction>> {
        sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        amount: f64,
        description: &str,
        kind: FinanceType,
        category_id: Option<Uuid>,
    ) -> sqlx::Result<Transaction> {
        sqlx::query_as::<_, Transaction>(&format!(
            "INSERT INTO transactions (user_id, amount, description, kind, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(amount)
        .bind(description)
        .bind(kind)
        .bind(category_id)
        .fetch_one(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        amount: Option<f64>,
        description: Option<&str>,
        kind: Option<FinanceType>,
        category_id: Option<Uuid>,
    ) -> sqlx::Result<Transaction> {
        sqlx::query_as::<_, Transaction>(&format!(
            "UPDATE transactions
             SET amount      = COALESCE($2, amount),
                 description = COALESCE($3, description),
                 kind        = COALESCE($4, kind),
                 category_id = COALESCE($5, category_id),
                 updated_at  = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(amount)
        .bind(description)
        .bind(kind)
        .bind(category_id)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
