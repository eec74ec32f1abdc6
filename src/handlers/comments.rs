//! Comment handlers - HTTP endpoints for comment operations.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::pagination::PageParams;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::CommentService;
use crate::validators::parse_id;

#[derive(Debug, Deserialize)]
pub struct CommentContentRequest {
    pub content: String,
}

/// GET /comments/{videoId}
pub async fn list_video_comments(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let service = CommentService::new((**pool).clone());
    let comments = service.list_by_video(video_id, *page).await?;
    Ok(ApiResponse::ok(comments, "Comments fetched successfully"))
}

/// POST /comments/{videoId}
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<CommentContentRequest>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let service = CommentService::new((**pool).clone());
    let comment = service.create(user.0, video_id, &req.content).await?;
    Ok(ApiResponse::created(comment, "Comment created successfully"))
}

/// PATCH /comments/c/{commentId}
pub async fn update_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<CommentContentRequest>,
) -> Result<HttpResponse> {
    let comment_id = parse_id(&path.into_inner(), "commentId")?;
    let service = CommentService::new((**pool).clone());
    let comment = service.update(user.0, comment_id, &req.content).await?;
    Ok(ApiResponse::ok(comment, "Comment updated successfully"))
}

/// DELETE /comments/c/{commentId}
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let comment_id = parse_id(&path.into_inner(), "commentId")?;
    let service = CommentService::new((**pool).clone());
    service.delete(user.0, comment_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Comment deleted successfully",
    ))
}
