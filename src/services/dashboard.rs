//! Dashboard service - per-channel aggregates.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{stats_repo, subscription_repo};
use crate::error::Result;
use crate::models::DashboardStats;

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Subscriber count plus the video-level aggregate; zero-valued when
    /// the channel has no videos.
    pub async fn channel_stats(&self, channel_id: Uuid) -> Result<DashboardStats> {
        let total_subscribers =
            subscription_repo::count_subscribers(&self.pool, channel_id).await?;
        let videos = stats_repo::video_aggregate(&self.pool, channel_id).await?;

        Ok(DashboardStats {
            channel_id,
            total_videos: videos.total_videos,
            total_views: videos.total_views,
            total_likes: videos.total_likes,
            total_subscribers,
        })
    }
}
