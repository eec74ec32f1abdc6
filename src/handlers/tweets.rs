//! Tweet handlers.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::TweetService;
use crate::validators::parse_id;

#[derive(Debug, Deserialize)]
pub struct TweetContentRequest {
    pub content: String,
}

/// POST /tweets
pub async fn create_tweet(
    pool: web::Data<PgPool>,
    user: UserId,
    req: web::Json<TweetContentRequest>,
) -> Result<HttpResponse> {
    let tweet = TweetService::new((**pool).clone())
        .create(user.0, &req.content)
        .await?;
    Ok(ApiResponse::created(tweet, "Tweet created successfully"))
}

/// GET /tweets/user/{userId}
pub async fn list_user_tweets(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = parse_id(&path.into_inner(), "userId")?;
    let tweets = TweetService::new((**pool).clone())
        .list_by_user(user_id)
        .await?;
    Ok(ApiResponse::ok(tweets, "Tweets fetched successfully"))
}

/// PATCH /tweets/{tweetId}
pub async fn update_tweet(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<TweetContentRequest>,
) -> Result<HttpResponse> {
    let tweet_id = parse_id(&path.into_inner(), "tweetId")?;
    let tweet = TweetService::new((**pool).clone())
        .update(user.0, tweet_id, &req.content)
        .await?;
    Ok(ApiResponse::ok(tweet, "Tweet updated successfully"))
}

/// DELETE /tweets/{tweetId}
pub async fn delete_tweet(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let tweet_id = parse_id(&path.into_inner(), "tweetId")?;
    TweetService::new((**pool).clone())
        .delete(user.0, tweet_id)
        .await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Tweet deleted successfully",
    ))
}
