//! Data models for vidstream-service.
//!
//! Database entities live next to the wire-facing view structs built from
//! them. Entities derive `sqlx::FromRow`; views serialize camelCase.

pub mod comment;
pub mod dashboard;
pub mod like;
pub mod playlist;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;

pub use comment::{Comment, CommentRow, CommentView};
pub use dashboard::DashboardStats;
pub use like::LikeState;
pub use playlist::{Playlist, PlaylistDetail, PlaylistSummary, PlaylistVideo};
pub use subscription::{ChannelList, SubscriberList, SubscriptionState};
pub use tweet::Tweet;
pub use user::{AnnotatedProfile, OwnerProfile, UserProfile};
pub use video::{Video, VideoListRow, VideoView};
