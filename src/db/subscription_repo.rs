//! Subscription storage. Toggle is insert-or-delete against the unique
//! (subscriber, channel) constraint; self-subscription is rejected upstream
//! and additionally fenced by a CHECK constraint.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::{Page, PageParams};
use crate::models::AnnotatedProfile;

/// Insert-or-delete the (subscriber, channel) pair; returns the resulting
/// subscribed state.
pub async fn toggle(
    pool: &PgPool,
    subscriber_id: Uuid,
    channel_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO subscriptions (subscriber_id, channel_id)
        VALUES ($1, $2)
        ON CONFLICT (subscriber_id, channel_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(subscriber_id)
    .bind(channel_id)
    .fetch_optional(pool)
    .await?;

    if inserted.is_some() {
        return Ok(true);
    }

    sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2")
        .bind(subscriber_id)
        .bind(channel_id)
        .execute(pool)
        .await?;
    Ok(false)
}

pub async fn count_subscribers(pool: &PgPool, channel_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE channel_id = $1")
        .bind(channel_id)
        .fetch_one(pool)
        .await
}

/// Subscribers of a channel, newest first. Each row carries whether the
/// requester subscribes to that listed user.
pub async fn list_subscribers(
    pool: &PgPool,
    channel_id: Uuid,
    requester_id: Uuid,
    page: PageParams,
) -> Result<Page<AnnotatedProfile>, sqlx::Error> {
    let total = count_subscribers(pool, channel_id).await?;

    let rows = sqlx::query_as::<_, AnnotatedProfile>(
        r#"
        SELECT u.id, u.username, u.email, u.avatar,
            EXISTS(SELECT 1 FROM subscriptions x
                   WHERE x.channel_id = u.id AND x.subscriber_id = $2) AS is_subscriber
        FROM subscriptions s
        JOIN users u ON u.id = s.subscriber_id
        WHERE s.channel_id = $1
        ORDER BY s.created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(channel_id)
    .bind(requester_id)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(Page::new(rows, total, page))
}

/// Channels a user subscribes to, newest first, with the same annotation.
pub async fn list_channels(
    pool: &PgPool,
    subscriber_id: Uuid,
    requester_id: Uuid,
    page: PageParams,
) -> Result<Page<AnnotatedProfile>, sqlx::Error> {
    let total: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE subscriber_id = $1")
            .bind(subscriber_id)
            .fetch_one(pool)
            .await?;

    let rows = sqlx::query_as::<_, AnnotatedProfile>(
        r#"
        SELECT u.id, u.username, u.email, u.avatar,
            EXISTS(SELECT 1 FROM subscriptions x
                   WHERE x.channel_id = u.id AND x.subscriber_id = $2) AS is_subscriber
        FROM subscriptions s
        JOIN users u ON u.id = s.channel_id
        WHERE s.subscriber_id = $1
        ORDER BY s.created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(subscriber_id)
    .bind(requester_id)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(Page::new(rows, total, page))
}
