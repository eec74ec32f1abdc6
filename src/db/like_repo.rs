//! Like storage. Toggles are atomic: an insert racing another toggle lands
//! on the partial unique index and falls through to the delete branch, so
//! no duplicate pair can exist.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::video_query::VIDEO_ROW_SELECT;
use crate::models::VideoListRow;

/// Insert-or-delete the (liker, video) pair; returns the resulting liked
/// state.
pub async fn toggle_video_like(
    pool: &PgPool,
    liked_by: Uuid,
    video_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO likes (liked_by, video_id)
        VALUES ($1, $2)
        ON CONFLICT (liked_by, video_id) WHERE video_id IS NOT NULL DO NOTHING
        RETURNING id
        "#,
    )
    .bind(liked_by)
    .bind(video_id)
    .fetch_optional(pool)
    .await?;

    if inserted.is_some() {
        return Ok(true);
    }

    sqlx::query("DELETE FROM likes WHERE liked_by = $1 AND video_id = $2")
        .bind(liked_by)
        .bind(video_id)
        .execute(pool)
        .await?;
    Ok(false)
}

pub async fn toggle_comment_like(
    pool: &PgPool,
    liked_by: Uuid,
    comment_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO likes (liked_by, comment_id)
        VALUES ($1, $2)
        ON CONFLICT (liked_by, comment_id) WHERE comment_id IS NOT NULL DO NOTHING
        RETURNING id
        "#,
    )
    .bind(liked_by)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    if inserted.is_some() {
        return Ok(true);
    }

    sqlx::query("DELETE FROM likes WHERE liked_by = $1 AND comment_id = $2")
        .bind(liked_by)
        .bind(comment_id)
        .execute(pool)
        .await?;
    Ok(false)
}

pub async fn toggle_tweet_like(
    pool: &PgPool,
    liked_by: Uuid,
    tweet_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO likes (liked_by, tweet_id)
        VALUES ($1, $2)
        ON CONFLICT (liked_by, tweet_id) WHERE tweet_id IS NOT NULL DO NOTHING
        RETURNING id
        "#,
    )
    .bind(liked_by)
    .bind(tweet_id)
    .fetch_optional(pool)
    .await?;

    if inserted.is_some() {
        return Ok(true);
    }

    sqlx::query("DELETE FROM likes WHERE liked_by = $1 AND tweet_id = $2")
        .bind(liked_by)
        .bind(tweet_id)
        .execute(pool)
        .await?;
    Ok(false)
}

/// Videos the user has liked, newest like first.
pub async fn list_liked_videos(
    pool: &PgPool,
    liked_by: Uuid,
    page: PageParams,
) -> Result<Page<VideoListRow>, sqlx::Error> {
    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM likes WHERE liked_by = $1 AND video_id IS NOT NULL",
    )
    .bind(liked_by)
    .fetch_one(pool)
    .await?;

    let sql = format!(
        "{VIDEO_ROW_SELECT} JOIN likes lk ON lk.video_id = v.id \
         WHERE lk.liked_by = $1 ORDER BY lk.created_at DESC LIMIT $2 OFFSET $3"
    );
    let rows = sqlx::query_as::<_, VideoListRow>(&sql)
        .bind(liked_by)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok(Page::new(rows, total, page))
}
