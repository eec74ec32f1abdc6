//! Subscription service - atomic channel toggle and annotated listings.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::PageParams;
use crate::db::{subscription_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{ChannelList, SubscriberList, SubscriptionState, UserProfile};

pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Subscribe/unsubscribe the actor to a channel. Self-subscription is
    /// rejected before anything touches the store.
    pub async fn toggle(&self, actor_id: Uuid, channel_id: Uuid) -> Result<SubscriptionState> {
        let channel = self.known_user(channel_id, "Channel").await?;

        if channel.id == actor_id {
            return Err(AppError::Unprocessable(
                "You cannot subscribe to yourself".into(),
            ));
        }

        let is_subscribed = subscription_repo::toggle(&self.pool, actor_id, channel.id).await?;
        Ok(SubscriptionState { is_subscribed })
    }

    /// Subscribers of a channel, each annotated with whether the requester
    /// subscribes to that listed user.
    pub async fn channel_subscribers(
        &self,
        requester_id: Uuid,
        channel_id: Uuid,
        page: PageParams,
    ) -> Result<SubscriberList> {
        let page = page.validated()?;
        let channel = self.known_user(channel_id, "Channel").await?;

        let subscribers =
            subscription_repo::list_subscribers(&self.pool, channel.id, requester_id, page)
                .await?;

        Ok(SubscriberList {
            channel,
            subscribers,
        })
    }

    /// Channels a user subscribes to, same annotation pattern.
    pub async fn subscribed_channels(
        &self,
        requester_id: Uuid,
        subscriber_id: Uuid,
        page: PageParams,
    ) -> Result<ChannelList> {
        let page = page.validated()?;
        let subscriber = self.known_user(subscriber_id, "Subscriber").await?;

        let channels =
            subscription_repo::list_channels(&self.pool, subscriber.id, requester_id, page)
                .await?;

        Ok(ChannelList {
            subscriber,
            channels,
        })
    }

    async fn known_user(&self, id: Uuid, label: &str) -> Result<UserProfile> {
        user_repo::find_profile(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{label} does not exist")))
    }
}
