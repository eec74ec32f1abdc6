//! Like service - atomic toggles per target kind plus the liked-videos
//! listing.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::{comment_repo, like_repo, tweet_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{LikeState, VideoView};

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn toggle_video(&self, actor_id: Uuid, video_id: Uuid) -> Result<LikeState> {
        video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;

        let is_liked = like_repo::toggle_video_like(&self.pool, actor_id, video_id).await?;
        Ok(LikeState { is_liked })
    }

    pub async fn toggle_comment(&self, actor_id: Uuid, comment_id: Uuid) -> Result<LikeState> {
        comment_repo::find(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment does not exist".into()))?;

        let is_liked = like_repo::toggle_comment_like(&self.pool, actor_id, comment_id).await?;
        Ok(LikeState { is_liked })
    }

    pub async fn toggle_tweet(&self, actor_id: Uuid, tweet_id: Uuid) -> Result<LikeState> {
        tweet_repo::find(&self.pool, tweet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet does not exist".into()))?;

        let is_liked = like_repo::toggle_tweet_like(&self.pool, actor_id, tweet_id).await?;
        Ok(LikeState { is_liked })
    }

    /// Videos the actor has liked, newest like first.
    pub async fn liked_videos(&self, actor_id: Uuid, page: PageParams) -> Result<Page<VideoView>> {
        let page = page.validated()?;
        let rows = like_repo::list_liked_videos(&self.pool, actor_id, page).await?;
        Ok(rows.map(VideoView::from))
    }
}
