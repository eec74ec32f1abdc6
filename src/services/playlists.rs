//! Playlist service - CRUD plus ordered video membership.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::db::{playlist_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{Playlist, PlaylistDetail, PlaylistSummary};
use crate::validators::require_trimmed;

pub struct PlaylistService {
    pool: PgPool,
}

impl PlaylistService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, name: &str, description: &str) -> Result<Playlist> {
        let name = require_trimmed(name, "name")?;
        let description = require_trimmed(description, "description")?;
        Ok(playlist_repo::insert(&self.pool, owner_id, &name, &description).await?)
    }

    /// A user's playlists with the thumbnail/views/duration aggregates.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageParams,
    ) -> Result<Page<PlaylistSummary>> {
        let page = page.validated()?;
        Ok(playlist_repo::list_by_owner(&self.pool, user_id, page).await?)
    }

    pub async fn get(&self, playlist_id: Uuid) -> Result<PlaylistDetail> {
        let playlist = playlist_repo::find(&self.pool, playlist_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist does not exist".into()))?;
        let videos = playlist_repo::videos_of(&self.pool, playlist_id).await?;
        Ok(PlaylistDetail::assemble(playlist, videos))
    }

    pub async fn add_video(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> Result<()> {
        video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;
        let playlist = self.owned_playlist(actor_id, playlist_id).await?;

        let added = playlist_repo::add_video(&self.pool, playlist.id, video_id).await?;
        if !added {
            return Err(AppError::Conflict("Video already exists in playlist".into()));
        }
        Ok(())
    }

    pub async fn remove_video(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> Result<()> {
        video_repo::find(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video does not exist".into()))?;
        let playlist = self.owned_playlist(actor_id, playlist_id).await?;

        let removed = playlist_repo::remove_video(&self.pool, playlist.id, video_id).await?;
        if !removed {
            return Err(AppError::Conflict("Video is not in the playlist".into()));
        }
        Ok(())
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<Playlist> {
        let name = require_trimmed(name, "name")?;
        let description = require_trimmed(description, "description")?;
        let playlist = self.owned_playlist(actor_id, playlist_id).await?;

        Ok(playlist_repo::update(&self.pool, playlist.id, &name, &description).await?)
    }

    pub async fn delete(&self, actor_id: Uuid, playlist_id: Uuid) -> Result<()> {
        let playlist = self.owned_playlist(actor_id, playlist_id).await?;
        playlist_repo::delete(&self.pool, playlist.id).await?;
        Ok(())
    }

    /// fetch -> 404 -> ownership -> 403
    async fn owned_playlist(&self, actor_id: Uuid, playlist_id: Uuid) -> Result<Playlist> {
        let playlist = playlist_repo::find(&self.pool, playlist_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist does not exist".into()))?;
        if playlist.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }
        Ok(playlist)
    }
}
