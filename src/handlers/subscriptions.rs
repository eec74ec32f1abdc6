//! Subscription handlers.

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::pagination::PageParams;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::SubscriptionService;
use crate::validators::parse_id;

/// POST /subscriptions/c/{channelId}
pub async fn toggle_subscription(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let channel_id = parse_id(&path.into_inner(), "channelId")?;
    let state = SubscriptionService::new((**pool).clone())
        .toggle(user.0, channel_id)
        .await?;

    let message = if state.is_subscribed {
        "Subscribed successfully"
    } else {
        "Unsubscribed successfully"
    };
    Ok(ApiResponse::ok(state, message))
}

/// GET /subscriptions/c/{channelId}
pub async fn list_channel_subscribers(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let channel_id = parse_id(&path.into_inner(), "channelId")?;
    let listing = SubscriptionService::new((**pool).clone())
        .channel_subscribers(user.0, channel_id, *page)
        .await?;
    Ok(ApiResponse::ok(listing, "Subscribers fetched successfully"))
}

/// GET /subscriptions/u/{subscriberId}
pub async fn list_subscribed_channels(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let subscriber_id = parse_id(&path.into_inner(), "subscriberId")?;
    let listing = SubscriptionService::new((**pool).clone())
        .subscribed_channels(user.0, subscriber_id, *page)
        .await?;
    Ok(ApiResponse::ok(
        listing,
        "Subscribed channels fetched successfully",
    ))
}
