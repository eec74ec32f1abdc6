use sqlx::PgPool;
use uuid::Uuid;

use crate::models::UserProfile;

/// Public profile of a user; the identity service owns the rest.
pub async fn find_profile(pool: &PgPool, id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        "SELECT id, username, email, full_name, avatar, cover_image FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
