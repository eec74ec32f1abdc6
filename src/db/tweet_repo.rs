use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Tweet;

const TWEET_COLS: &str = "id, owner_id, content, created_at, updated_at";

pub async fn insert(pool: &PgPool, owner_id: Uuid, content: &str) -> Result<Tweet, sqlx::Error> {
    let sql =
        format!("INSERT INTO tweets (owner_id, content) VALUES ($1, $2) RETURNING {TWEET_COLS}");
    sqlx::query_as::<_, Tweet>(&sql)
        .bind(owner_id)
        .bind(content)
        .fetch_one(pool)
        .await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Tweet>, sqlx::Error> {
    let sql = format!("SELECT {TWEET_COLS} FROM tweets WHERE id = $1");
    sqlx::query_as::<_, Tweet>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All tweets of a user, newest first.
pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Tweet>, sqlx::Error> {
    let sql = format!(
        "SELECT {TWEET_COLS} FROM tweets WHERE owner_id = $1 ORDER BY created_at DESC"
    );
    sqlx::query_as::<_, Tweet>(&sql)
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

pub async fn update_content(pool: &PgPool, id: Uuid, content: &str) -> Result<Tweet, sqlx::Error> {
    let sql = format!(
        "UPDATE tweets SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING {TWEET_COLS}"
    );
    sqlx::query_as::<_, Tweet>(&sql)
        .bind(id)
        .bind(content)
        .fetch_one(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM tweets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
