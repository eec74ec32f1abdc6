//! Business logic layer: one service per domain. Services own the
//! validation and ownership rules; handlers stay thin.

pub mod comments;
pub mod dashboard;
pub mod likes;
pub mod media;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

pub use comments::CommentService;
pub use dashboard::DashboardService;
pub use likes::LikeService;
pub use media::{HttpMediaHost, MediaAsset, MediaHost};
pub use playlists::PlaylistService;
pub use subscriptions::SubscriptionService;
pub use tweets::TweetService;
pub use videos::VideoService;
