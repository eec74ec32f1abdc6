use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::models::{Comment, CommentRow};

const COMMENT_ROW_SELECT: &str = "\
SELECT c.id, c.video_id, c.owner_id, c.content, c.created_at, c.updated_at, \
u.username AS owner_username, u.email AS owner_email, \
u.full_name AS owner_full_name, u.avatar AS owner_avatar \
FROM comments c JOIN users u ON u.id = c.owner_id";

/// One page of a video's comments, newest first, owner-enriched.
pub async fn list_by_video(
    pool: &PgPool,
    video_id: Uuid,
    page: PageParams,
) -> Result<Page<CommentRow>, sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE video_id = $1")
        .bind(video_id)
        .fetch_one(pool)
        .await?;

    let sql = format!(
        "{COMMENT_ROW_SELECT} WHERE c.video_id = $1 ORDER BY c.created_at DESC LIMIT $2 OFFSET $3"
    );
    let rows = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(video_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok(Page::new(rows, total, page))
}

pub async fn insert(
    pool: &PgPool,
    video_id: Uuid,
    owner_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (video_id, owner_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, video_id, owner_id, content, created_at, updated_at
        "#,
    )
    .bind(video_id)
    .bind(owner_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, video_id, owner_id, content, created_at, updated_at FROM comments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_with_owner(pool: &PgPool, id: Uuid) -> Result<Option<CommentRow>, sqlx::Error> {
    let sql = format!("{COMMENT_ROW_SELECT} WHERE c.id = $1");
    sqlx::query_as::<_, CommentRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_content(
    pool: &PgPool,
    id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments SET content = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, video_id, owner_id, content, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
