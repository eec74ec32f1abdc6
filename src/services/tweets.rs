//! Tweet service.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::tweet_repo;
use crate::error::{AppError, Result};
use crate::models::Tweet;
use crate::validators::require_trimmed;

pub struct TweetService {
    pool: PgPool,
}

impl TweetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, content: &str) -> Result<Tweet> {
        let content = require_trimmed(content, "content")?;
        Ok(tweet_repo::insert(&self.pool, owner_id, &content).await?)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Tweet>> {
        Ok(tweet_repo::list_by_owner(&self.pool, user_id).await?)
    }

    pub async fn update(&self, actor_id: Uuid, tweet_id: Uuid, content: &str) -> Result<Tweet> {
        let content = require_trimmed(content, "content")?;

        let tweet = tweet_repo::find(&self.pool, tweet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet does not exist".into()))?;
        if tweet.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        Ok(tweet_repo::update_content(&self.pool, tweet_id, &content).await?)
    }

    pub async fn delete(&self, actor_id: Uuid, tweet_id: Uuid) -> Result<()> {
        let tweet = tweet_repo::find(&self.pool, tweet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet does not exist".into()))?;
        if tweet.owner_id != actor_id {
            return Err(AppError::Forbidden("Forbidden request".into()));
        }

        tweet_repo::delete(&self.pool, tweet_id).await?;
        Ok(())
    }
}
