//! Comment service - creation, listing, and owner mutations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::{comment_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::CommentView;
use crate::validators::require_trimmed;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comments of a video, newest first, owner-enriched. A video with no
    /// comments yields an empty page, not an error.
    pub async fn list_by_video(
        &self,
        video_id: Uuid,
        page: PageParams,
    ) -> Result<Page<CommentView>> {
        let page = page.validated()?;
        let rows = comment_repo::list_by_video(&self.pool, video_id, page).await?;
        Ok(rows.map(CommentView::from))
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        video_id: Uuid,
        content: &str,
    ) -> Result<CommentView> {
        let content = require_trimmed(content, "content")?;

        video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;

        let comment = comment_repo::insert(&self.pool, video_id, owner_id, &content).await?;

        comment_repo::find_with_owner(&self.pool, comment.id)
            .await?
            .map(CommentView::from)
            .ok_or_else(|| {
                AppError::Internal("something went wrong while creating the comment".into())
            })
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<CommentView> {
        let content = require_trimmed(content, "content")?;

        let comment = comment_repo::find(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment does not exist".into()))?;
        if comment.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        comment_repo::update_content(&self.pool, comment_id, &content).await?;

        comment_repo::find_with_owner(&self.pool, comment_id)
            .await?
            .map(CommentView::from)
            .ok_or_else(|| AppError::Internal("comment missing after update".into()))
    }

    pub async fn delete(&self, actor_id: Uuid, comment_id: Uuid) -> Result<()> {
        let comment = comment_repo::find(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment does not exist".into()))?;
        if comment.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        comment_repo::delete(&self.pool, comment_id).await?;
        Ok(())
    }
}
