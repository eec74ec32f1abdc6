use serde::Serialize;
use uuid::Uuid;

/// Per-channel dashboard summary. Zero-valued when the owner has no videos.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub channel_id: Uuid,
    pub total_videos: i64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_subscribers: i64,
}
