//! Playlist handlers.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::pagination::PageParams;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::PlaylistService;
use crate::validators::parse_id;

#[derive(Debug, Deserialize)]
pub struct PlaylistRequest {
    pub name: String,
    pub description: String,
}

/// POST /playlists
pub async fn create_playlist(
    pool: web::Data<PgPool>,
    user: UserId,
    req: web::Json<PlaylistRequest>,
) -> Result<HttpResponse> {
    let playlist = PlaylistService::new((**pool).clone())
        .create(user.0, &req.name, &req.description)
        .await?;
    Ok(ApiResponse::created(playlist, "Playlist created successfully"))
}

/// GET /playlists/user/{userId}
pub async fn list_user_playlists(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let user_id = parse_id(&path.into_inner(), "userId")?;
    let playlists = PlaylistService::new((**pool).clone())
        .list_by_user(user_id, *page)
        .await?;
    Ok(ApiResponse::ok(playlists, "Playlists fetched successfully"))
}

/// GET /playlists/{playlistId}
pub async fn get_playlist(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let playlist_id = parse_id(&path.into_inner(), "playlistId")?;
    let playlist = PlaylistService::new((**pool).clone())
        .get(playlist_id)
        .await?;
    Ok(ApiResponse::ok(playlist, "Playlist fetched successfully"))
}

/// PATCH /playlists/add/{videoId}/{playlistId}
pub async fn add_video_to_playlist(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (raw_video, raw_playlist) = path.into_inner();
    let video_id = parse_id(&raw_video, "videoId")?;
    let playlist_id = parse_id(&raw_playlist, "playlistId")?;

    PlaylistService::new((**pool).clone())
        .add_video(user.0, playlist_id, video_id)
        .await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Video added to playlist successfully",
    ))
}

/// PATCH /playlists/remove/{videoId}/{playlistId}
pub async fn remove_video_from_playlist(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (raw_video, raw_playlist) = path.into_inner();
    let video_id = parse_id(&raw_video, "videoId")?;
    let playlist_id = parse_id(&raw_playlist, "playlistId")?;

    PlaylistService::new((**pool).clone())
        .remove_video(user.0, playlist_id, video_id)
        .await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Video removed from playlist successfully",
    ))
}

/// PATCH /playlists/{playlistId}
pub async fn update_playlist(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<PlaylistRequest>,
) -> Result<HttpResponse> {
    let playlist_id = parse_id(&path.into_inner(), "playlistId")?;
    let playlist = PlaylistService::new((**pool).clone())
        .update(user.0, playlist_id, &req.name, &req.description)
        .await?;
    Ok(ApiResponse::ok(playlist, "Playlist updated successfully"))
}

/// DELETE /playlists/{playlistId}
pub async fn delete_playlist(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let playlist_id = parse_id(&path.into_inner(), "playlistId")?;
    PlaylistService::new((**pool).clone())
        .delete(user.0, playlist_id)
        .await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Playlist deleted successfully",
    ))
}
