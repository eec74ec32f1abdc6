use sqlx::PgPool;
use uuid::Uuid;

/// Aggregate over all videos owned by a channel. Zero-valued when the
/// channel has no videos (COALESCE keeps the sums non-null).
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct VideoAggregate {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_likes: i64,
}

pub async fn video_aggregate(pool: &PgPool, owner_id: Uuid) -> Result<VideoAggregate, sqlx::Error> {
    sqlx::query_as::<_, VideoAggregate>(
        r#"
        SELECT COUNT(*) AS total_videos,
               COALESCE(SUM(v.views), 0)::BIGINT AS total_views,
               COALESCE(SUM((SELECT COUNT(*) FROM likes l WHERE l.video_id = v.id)), 0)::BIGINT
                   AS total_likes
        FROM videos v
        WHERE v.owner_id = $1
        "#,
    )
    .bind(owner_id)
    .fetch_one(pool)
    .await
}
