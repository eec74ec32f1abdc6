use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playlist database entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Playlist listing row with aggregates over its published videos:
/// first thumbnail, summed views, summed duration.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub thumbnail: Option<String>,
    pub total_views: i64,
    pub duration_seconds: f64,
}

/// Published video entry inside a playlist detail view, in playlist order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistVideo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub views: i64,
    pub duration_seconds: f64,
    pub is_published: bool,
}

/// Full playlist view: the entity plus its published videos and aggregates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub videos: Vec<PlaylistVideo>,
    pub total_views: i64,
    pub duration_seconds: f64,
}

impl PlaylistDetail {
    pub fn assemble(playlist: Playlist, videos: Vec<PlaylistVideo>) -> Self {
        let total_views = videos.iter().map(|v| v.views).sum();
        let duration_seconds = videos.iter().map(|v| v.duration_seconds).sum();
        PlaylistDetail {
            id: playlist.id,
            owner_id: playlist.owner_id,
            name: playlist.name,
            description: playlist.description,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
            videos,
            total_views,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_sums_views_and_duration() {
        let playlist = Playlist {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "mix".into(),
            description: "d".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let videos = vec![
            PlaylistVideo {
                id: Uuid::new_v4(),
                title: "a".into(),
                description: "".into(),
                thumbnail_url: "t1".into(),
                views: 10,
                duration_seconds: 30.0,
                is_published: true,
            },
            PlaylistVideo {
                id: Uuid::new_v4(),
                title: "b".into(),
                description: "".into(),
                thumbnail_url: "t2".into(),
                views: 5,
                duration_seconds: 12.5,
                is_published: true,
            },
        ];

        let detail = PlaylistDetail::assemble(playlist, videos);
        assert_eq!(detail.total_views, 15);
        assert!((detail.duration_seconds - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_playlist_aggregates_to_zero() {
        let playlist = Playlist {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "empty".into(),
            description: "d".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let detail = PlaylistDetail::assemble(playlist, vec![]);
        assert_eq!(detail.total_views, 0);
        assert_eq!(detail.duration_seconds, 0.0);
    }
}
