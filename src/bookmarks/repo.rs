use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = "id, user_id, title, description, link, created_at, updated_at";

impl Bookmark {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Bookmark>> {
        sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {COLUMNS} FROM bookmarks WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Owner-scoped read: an id belonging to someone else comes back as
    /// `None`, same as an id that does not exist.
    pub async fn find_scoped(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<Option<Bookmark>> {
        sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {COLUMNS} FROM bookmarks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Unscoped load for the mutation paths, which compare the owner
    /// explicitly and answer 403 on a mismatch.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Bookmark>> {
        sqlx::query_as::<_, Bookmark>(&format!("SELECT {COLUMNS} FROM bookmarks WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        link: &str,
    ) -> sqlx::Result<Bookmark> {
        sqlx::query_as::<_, Bookmark>(&format!(
            "INSERT INTO bookmarks (user_id, title, description, link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(link)
        .fetch_one(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        link: Option<&str>,
    ) -> sqlx::Result<Bookmark> {
        sqlx::query_as::<_, Bookmark>(&format!(
            "UPDATE bookmarks
             SET title       = COALESCE($2, title),
                 description = COALESCE($3, description),
                 link        = COALESCE($4, link),
                 updated_at  = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(link)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
