//! Video service - listing, publishing, retrieval, and owner mutations.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::video_query::VideoListQuery;
use crate::db::video_repo;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::VideoView;
use crate::services::media::MediaHost;
use crate::validators::require_trimmed;

pub struct VideoService {
    pool: PgPool,
    media: Arc<dyn MediaHost>,
}

impl VideoService {
    pub fn new(pool: PgPool, media: Arc<dyn MediaHost>) -> Self {
        Self { pool, media }
    }

    /// Published videos matching the query, paginated and owner-enriched.
    pub async fn list(&self, query: VideoListQuery, page: PageParams) -> Result<Page<VideoView>> {
        let page = page.validated()?;
        let rows = video_repo::list(&self.pool, &query, page).await?;
        Ok(rows.map(VideoView::from))
    }

    /// Publish a new video: both upload references are handed to the media
    /// host, which returns durable URLs and the probed duration.
    pub async fn publish(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        video_upload: &str,
        thumbnail_upload: &str,
    ) -> Result<VideoView> {
        let title = require_trimmed(title, "title")?;
        let description = require_trimmed(description, "description")?;
        let video_ref = require_trimmed(video_upload, "videoFile")?;
        let thumbnail_ref = require_trimmed(thumbnail_upload, "thumbnail")?;

        let video_asset = self.media.ingest(&video_ref).await?;
        let thumbnail_asset = self.media.ingest(&thumbnail_ref).await?;

        let video = video_repo::insert(
            &self.pool,
            owner_id,
            &title,
            &description,
            &video_asset.url,
            &thumbnail_asset.url,
            video_asset.duration_seconds,
        )
        .await?;

        video_repo::find_with_owner(&self.pool, video.id)
            .await?
            .map(VideoView::from)
            .ok_or_else(|| {
                AppError::Internal("something went wrong while publishing the video".into())
            })
    }

    /// Fetch one video. Unpublished videos are only visible to their owner.
    /// The view counter is incremented in a spawned task; a failed increment
    /// is logged and swallowed.
    pub async fn get(&self, requester_id: Uuid, video_id: Uuid) -> Result<VideoView> {
        let mut row = video_repo::find_with_owner(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;

        if !row.is_published && row.owner_id != requester_id {
            return Err(AppError::Forbidden(
                "Video is not available for public access".into(),
            ));
        }

        row.views += 1;
        let pool = self.pool.clone();
        tokio::spawn(async move {
            match video_repo::increment_views(&pool, video_id).await {
                Ok(()) => metrics::VIDEO_VIEW_EVENTS.inc(),
                Err(err) => tracing::debug!("view increment failed for {video_id}: {err}"),
            }
        });

        Ok(VideoView::from(row))
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        video_id: Uuid,
        title: &str,
        description: &str,
        thumbnail_upload: Option<&str>,
    ) -> Result<VideoView> {
        // Resolve existence and ownership before complaining about the payload.
        let video = video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;
        if video.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        let title = require_trimmed(title, "title")?;
        let description = require_trimmed(description, "description")?;

        let thumbnail_url = match thumbnail_upload {
            Some(upload_ref) => Some(self.media.ingest(upload_ref.trim()).await?.url),
            None => None,
        };

        video_repo::update_metadata(
            &self.pool,
            video_id,
            &title,
            &description,
            thumbnail_url.as_deref(),
        )
        .await?;

        video_repo::find_with_owner(&self.pool, video_id)
            .await?
            .map(VideoView::from)
            .ok_or_else(|| AppError::Internal("video missing after update".into()))
    }

    pub async fn delete(&self, actor_id: Uuid, video_id: Uuid) -> Result<()> {
        let video = video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;
        if video.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        video_repo::delete(&self.pool, video_id).await?;
        Ok(())
    }

    /// Flip the publish flag; reports the new state through the view.
    pub async fn toggle_publish(&self, actor_id: Uuid, video_id: Uuid) -> Result<VideoView> {
        let video = video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;
        if video.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        video_repo::toggle_publish(&self.pool, video_id).await?;

        video_repo::find_with_owner(&self.pool, video_id)
            .await?
            .map(VideoView::from)
            .ok_or_else(|| AppError::Internal("video missing after publish toggle".into()))
    }
}
