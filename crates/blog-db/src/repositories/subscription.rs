//! PostgreSQL implementation of SubscriptionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Subscription;
use blog_core::traits::{RepoResult, SubscriptionRepository};
use blog_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of SubscriptionRepository
#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    /// Create a new PgSubscriptionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[instrument(skip(self, subscription))]
    async fn try_create(&self, subscription: &Subscription) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO subscriptions (subscriber_id, author_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (subscriber_id, author_id) DO NOTHING
            "#,
        )
        .bind(subscription.subscriber_id.into_inner())
        .bind(subscription.author_id.into_inner())
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2
            "#,
        )
        .bind(subscriber_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2
            )
            "#,
        )
        .bind(subscriber_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn find_subscribers(&self, author_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT subscriber_id FROM subscriptions
            WHERE author_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSubscriptionRepository>();
    }
}
