//! Video handlers - HTTP endpoints for video operations.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::pagination::PageParams;
use crate::db::video_query::VideoListQuery;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::{MediaHost, VideoService};
use crate::validators::parse_id;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_type: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishVideoRequest {
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
}

fn service(pool: &web::Data<PgPool>, media: &web::Data<Arc<dyn MediaHost>>) -> VideoService {
    VideoService::new((***pool).clone(), media.get_ref().clone())
}

/// GET /videos
pub async fn list_videos(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    params: web::Query<VideoListParams>,
) -> Result<HttpResponse> {
    let params = params.into_inner();
    let owner = params
        .user_id
        .as_deref()
        .map(|raw| parse_id(raw, "userId"))
        .transpose()?;

    let query = VideoListQuery::new(
        owner,
        params.query,
        params.sort_by.as_deref(),
        params.sort_type.as_deref(),
    )?;
    let page = PageParams::from_parts(params.page, params.limit);

    let videos = service(&pool, &media).list(query, page).await?;
    Ok(ApiResponse::ok(videos, "Videos fetched successfully"))
}

/// POST /videos
pub async fn publish_video(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    req: web::Json<PublishVideoRequest>,
) -> Result<HttpResponse> {
    let video = service(&pool, &media)
        .publish(
            user.0,
            &req.title,
            &req.description,
            &req.video_file,
            &req.thumbnail,
        )
        .await?;

    Ok(ApiResponse::created(video, "Video published successfully"))
}

/// GET /videos/{videoId}
pub async fn get_video(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let video = service(&pool, &media).get(user.0, video_id).await?;
    Ok(ApiResponse::ok(video, "Video fetched successfully"))
}

/// PATCH /videos/{videoId}
pub async fn update_video(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<UpdateVideoRequest>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let video = service(&pool, &media)
        .update(
            user.0,
            video_id,
            &req.title,
            &req.description,
            req.thumbnail.as_deref(),
        )
        .await?;

    Ok(ApiResponse::ok(video, "Video details updated successfully"))
}

/// DELETE /videos/{videoId}
pub async fn delete_video(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    service(&pool, &media).delete(user.0, video_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Video deleted successfully",
    ))
}

/// PATCH /videos/toggle/publish/{videoId}
pub async fn toggle_publish(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let video = service(&pool, &media).toggle_publish(user.0, video_id).await?;

    let message = if video.is_published {
        "Video marked published successfully"
    } else {
        "Video marked unpublished successfully"
    };
    Ok(ApiResponse::ok(video, message))
}
