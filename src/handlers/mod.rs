pub mod comments;
pub mod dashboard;
pub mod health;
pub mod likes;
pub mod playlists;
pub mod response;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

pub use response::ApiResponse;
