use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::OwnerProfile;

/// Video database entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_seconds: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row produced by the owner-enriched video queries: the video columns
/// plus the joined owner profile subset and the like count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VideoListRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_seconds: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_email: String,
    pub owner_full_name: String,
    pub owner_avatar: Option<String>,
    pub total_likes: i64,
}

/// Wire shape of a video with its owner nested.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_seconds: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: OwnerProfile,
    pub total_likes: i64,
}

impl From<VideoListRow> for VideoView {
    fn from(row: VideoListRow) -> Self {
        VideoView {
            id: row.id,
            title: row.title,
            description: row.description,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            duration_seconds: row.duration_seconds,
            views: row.views,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
            owner: OwnerProfile {
                id: row.owner_id,
                username: row.owner_username,
                email: row.owner_email,
                full_name: row.owner_full_name,
                avatar: row.owner_avatar,
            },
            total_likes: row.total_likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> VideoListRow {
        VideoListRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "t".into(),
            description: "d".into(),
            video_url: "https://cdn/v.mp4".into(),
            thumbnail_url: "https://cdn/t.png".into(),
            duration_seconds: 12.5,
            views: 3,
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            owner_username: "alice".into(),
            owner_email: "alice@example.com".into(),
            owner_full_name: "Alice A".into(),
            owner_avatar: None,
            total_likes: 7,
        }
    }

    #[test]
    fn view_nests_the_owner_profile() {
        let row = sample_row();
        let owner_id = row.owner_id;
        let view = VideoView::from(row);
        assert_eq!(view.owner.id, owner_id);
        assert_eq!(view.owner.username, "alice");
        assert_eq!(view.total_likes, 7);
    }

    #[test]
    fn view_serializes_camel_case() {
        let json = serde_json::to_value(VideoView::from(sample_row())).unwrap();
        assert!(json.get("videoUrl").is_some());
        assert!(json.get("thumbnailUrl").is_some());
        assert!(json.get("isPublished").is_some());
        assert!(json.get("totalLikes").is_some());
        assert!(json["owner"].get("fullName").is_some());
    }
}
