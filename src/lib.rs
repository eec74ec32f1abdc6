/// Vidstream Service Library
///
/// Backend for a video-sharing platform: video publishing and discovery,
/// comments, likes, playlists, channel subscriptions, tweets and a channel
/// dashboard. Identity is injected by the upstream gateway.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and response envelopes
/// - `models`: Data structures for videos, comments, playlists, etc.
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: Gateway identity extraction
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
