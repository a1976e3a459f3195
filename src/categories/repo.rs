use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Expense/income discriminator shared by categories and transactions.
/// Mirrors the `finance_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "finance_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FinanceType {
    Expense,
    Income,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    pub keywords: Vec<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str =
    "id, user_id, name, description, color, icon, kind, keywords, is_active, created_at, updated_at";

impl Category {
    /// Lists the caller's categories alphabetically. Without an explicit
    /// `is_active` filter only active categories are returned.
    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        kind: Option<FinanceType>,
        is_active: Option<bool>,
    ) -> sqlx::Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1
               AND is_active = $2
               AND ($3::finance_type IS NULL OR kind = $3)
             ORDER BY name ASC"
        ))
        .bind(user_id)
        .bind(is_active.unwrap_or(true))
        .bind(kind)
        .fetch_all(db)
        .await
    }

    pub async fn find_scoped(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM categories WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        description: Option<&str>,
        color: Option<&str>,
        icon: Option<&str>,
        kind: FinanceType,
        keywords: &[String],
    ) -> sqlx::Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (user_id, name, description, color, icon, kind, keywords)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(color)
        .bind(icon)
        .bind(kind)
        .bind(keywords)
        .fetch_one(db)
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        color: Option<&str>,
        icon: Option<&str>,
        kind: Option<FinanceType>,
        keywords: Option<&[String]>,
        is_active: Option<bool>,
    ) -> sqlx::Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories
             SET name        = COALESCE($2, name),
                 description = COALESCE($3, description),
                 color       = COALESCE($4, color),
                 icon        = COALESCE($5, icon),
                 kind        = COALESCE($6, kind),
                 keywords    = COALESCE($7, keywords),
                 is_active   = COALESCE($8, is_active),
                 updated_at  = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(color)
        .bind(icon)
        .bind(kind)
        .bind(keywords)
        .bind(is_active)
        .fetch_one(db)
        .await
    }

    /// Soft delete: deactivates instead of removing the row so dependent
    /// transactions keep a resolvable reference.
    pub async fn deactivate(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("UPDATE categories SET is_active = FALSE, updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
