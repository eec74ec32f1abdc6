use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::video_query::{VideoListQuery, VIDEO_ROW_SELECT};
use crate::models::{Video, VideoListRow};

/// One page of owner-enriched videos matching the query, with the total
/// over the same filters.
pub async fn list(
    pool: &PgPool,
    query: &VideoListQuery,
    page: PageParams,
) -> Result<Page<VideoListRow>, sqlx::Error> {
    let total: i64 = query
        .count_statement()
        .build_query_scalar()
        .fetch_one(pool)
        .await?;

    let rows = query
        .page_statement(page.limit, page.offset())
        .build_query_as::<VideoListRow>()
        .fetch_all(pool)
        .await?;

    Ok(Page::new(rows, total, page))
}

/// Owner-enriched single video (with like count).
pub async fn find_with_owner(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<VideoListRow>, sqlx::Error> {
    let sql = format!("{VIDEO_ROW_SELECT} WHERE v.id = $1");
    sqlx::query_as::<_, VideoListRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        SELECT id, owner_id, title, description, video_url, thumbnail_url,
               duration_seconds, views, is_published, created_at, updated_at
        FROM videos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    description: &str,
    video_url: &str,
    thumbnail_url: &str,
    duration_seconds: f64,
) -> Result<Video, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        INSERT INTO videos (owner_id, title, description, video_url, thumbnail_url, duration_seconds)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, owner_id, title, description, video_url, thumbnail_url,
                  duration_seconds, views, is_published, created_at, updated_at
        "#,
    )
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .bind(video_url)
    .bind(thumbnail_url)
    .bind(duration_seconds)
    .fetch_one(pool)
    .await
}

/// Update title/description, optionally replacing the thumbnail.
pub async fn update_metadata(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    description: &str,
    thumbnail_url: Option<&str>,
) -> Result<Video, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        UPDATE videos SET
            title = $2,
            description = $3,
            thumbnail_url = COALESCE($4, thumbnail_url),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, owner_id, title, description, video_url, thumbnail_url,
                  duration_seconds, views, is_published, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(thumbnail_url)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}

/// Flip the publish flag and return the updated row.
pub async fn toggle_publish(pool: &PgPool, id: Uuid) -> Result<Video, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        UPDATE videos SET is_published = NOT is_published, updated_at = NOW()
        WHERE id = $1
        RETURNING id, owner_id, title, description, video_url, thumbnail_url,
                  duration_seconds, views, is_published, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Lost updates under concurrent reads are tolerated; the counter is not
/// load-bearing.
pub async fn increment_views(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE videos SET views = views + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
