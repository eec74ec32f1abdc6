//! Database access layer: pagination, the listing-query builder, and one
//! repository module per collection.

pub mod comment_repo;
pub mod like_repo;
pub mod pagination;
pub mod playlist_repo;
pub mod stats_repo;
pub mod subscription_repo;
pub mod tweet_repo;
pub mod user_repo;
pub mod video_query;
pub mod video_repo;

use sqlx::PgPool;

/// Apply the embedded migrations at startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
