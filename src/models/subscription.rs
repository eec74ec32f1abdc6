use serde::Serialize;

use super::user::{AnnotatedProfile, UserProfile};
use crate::db::pagination::Page;

/// Resulting state reported by a subscription toggle.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionState {
    pub is_subscribed: bool,
}

/// Subscribers of a channel, with the channel's profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberList {
    pub channel: UserProfile,
    pub subscribers: Page<AnnotatedProfile>,
}

/// Channels a user subscribes to, with the subscriber's profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelList {
    pub subscriber: UserProfile,
    pub channels: Page<AnnotatedProfile>,
}
