use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::models::{Playlist, PlaylistSummary, PlaylistVideo};

const PLAYLIST_COLS: &str =
    "id, owner_id, name, description, created_at, updated_at";

pub async fn insert(
    pool: &PgPool,
    owner_id: Uuid,
    name: &str,
    description: &str,
) -> Result<Playlist, sqlx::Error> {
    let sql = format!(
        "INSERT INTO playlists (owner_id, name, description) VALUES ($1, $2, $3) \
         RETURNING {PLAYLIST_COLS}"
    );
    sqlx::query_as::<_, Playlist>(&sql)
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Playlist>, sqlx::Error> {
    let sql = format!("SELECT {PLAYLIST_COLS} FROM playlists WHERE id = $1");
    sqlx::query_as::<_, Playlist>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// One page of a user's playlists, newest first, each annotated with the
/// first published video's thumbnail and summed views/duration.
pub async fn list_by_owner(
    pool: &PgPool,
    owner_id: Uuid,
    page: PageParams,
) -> Result<Page<PlaylistSummary>, sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlists WHERE owner_id = $1")
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, PlaylistSummary>(
        r#"
        SELECT p.id, p.name, p.description, p.created_at, p.updated_at,
            (SELECT v.thumbnail_url
             FROM playlist_videos pv JOIN videos v ON v.id = pv.video_id
             WHERE pv.playlist_id = p.id AND v.is_published
             ORDER BY pv.position
             LIMIT 1) AS thumbnail,
            COALESCE((SELECT SUM(v.views)
             FROM playlist_videos pv JOIN videos v ON v.id = pv.video_id
             WHERE pv.playlist_id = p.id AND v.is_published), 0)::BIGINT AS total_views,
            COALESCE((SELECT SUM(v.duration_seconds)
             FROM playlist_videos pv JOIN videos v ON v.id = pv.video_id
             WHERE pv.playlist_id = p.id AND v.is_published), 0)::DOUBLE PRECISION AS duration_seconds
        FROM playlists p
        WHERE p.owner_id = $1
        ORDER BY p.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(owner_id)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(Page::new(rows, total, page))
}

/// Published videos of a playlist, in playlist order.
pub async fn videos_of(pool: &PgPool, playlist_id: Uuid) -> Result<Vec<PlaylistVideo>, sqlx::Error> {
    sqlx::query_as::<_, PlaylistVideo>(
        r#"
        SELECT v.id, v.title, v.description, v.thumbnail_url, v.views,
               v.duration_seconds, v.is_published
        FROM playlist_videos pv
        JOIN videos v ON v.id = pv.video_id
        WHERE pv.playlist_id = $1 AND v.is_published
        ORDER BY pv.position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await
}

/// Append the video at the end; false when the pair already exists.
pub async fn add_video(
    pool: &PgPool,
    playlist_id: Uuid,
    video_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        r#"
        INSERT INTO playlist_videos (playlist_id, video_id, position)
        VALUES ($1, $2,
            (SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_videos WHERE playlist_id = $1))
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(playlist_id)
    .bind(video_id)
    .execute(pool)
    .await?;
    Ok(res.rows_affected() > 0)
}

/// Remove the membership; false when the video was not in the playlist.
pub async fn remove_video(
    pool: &PgPool,
    playlist_id: Uuid,
    video_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1 AND video_id = $2")
        .bind(playlist_id)
        .bind(video_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    description: &str,
) -> Result<Playlist, sqlx::Error> {
    let sql = format!(
        "UPDATE playlists SET name = $2, description = $3, updated_at = NOW() \
         WHERE id = $1 RETURNING {PLAYLIST_COLS}"
    );
    sqlx::query_as::<_, Playlist>(&sql)
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM playlists WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
