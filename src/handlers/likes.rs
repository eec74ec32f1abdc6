//! Like handlers - toggle endpoints and the liked-videos listing.

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::pagination::PageParams;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::LikeService;
use crate::validators::parse_id;

/// POST /likes/toggle/v/{videoId}
pub async fn toggle_video_like(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let video_id = parse_id(&path.into_inner(), "videoId")?;
    let state = LikeService::new((**pool).clone())
        .toggle_video(user.0, video_id)
        .await?;

    let message = if state.is_liked {
        "Video liked successfully"
    } else {
        "Video unliked successfully"
    };
    Ok(ApiResponse::ok(state, message))
}

/// POST /likes/toggle/c/{commentId}
pub async fn toggle_comment_like(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let comment_id = parse_id(&path.into_inner(), "commentId")?;
    let state = LikeService::new((**pool).clone())
        .toggle_comment(user.0, comment_id)
        .await?;

    let message = if state.is_liked {
        "Comment liked successfully"
    } else {
        "Comment unliked successfully"
    };
    Ok(ApiResponse::ok(state, message))
}

/// POST /likes/toggle/t/{tweetId}
pub async fn toggle_tweet_like(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let tweet_id = parse_id(&path.into_inner(), "tweetId")?;
    let state = LikeService::new((**pool).clone())
        .toggle_tweet(user.0, tweet_id)
        .await?;

    let message = if state.is_liked {
        "Tweet liked successfully"
    } else {
        "Tweet unliked successfully"
    };
    Ok(ApiResponse::ok(state, message))
}

/// GET /likes/videos
pub async fn list_liked_videos(
    pool: web::Data<PgPool>,
    user: UserId,
    page: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let videos = LikeService::new((**pool).clone())
        .liked_videos(user.0, *page)
        .await?;
    Ok(ApiResponse::ok(videos, "Liked videos fetched successfully"))
}
