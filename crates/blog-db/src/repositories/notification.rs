//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Notification;
use blog_core::traits::{NotificationRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, recipient_id, origin_id, post_id, comment_id,
                                       message, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(notification.id.into_inner())
        .bind(notification.recipient_id.into_inner())
        .bind(notification.origin_id.into_inner())
        .bind(notification.post_id.into_inner())
        .bind(notification.comment_id.map(Snowflake::into_inner))
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_recipient(
        &self,
        recipient_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Notification>> {
        let limit = limit.clamp(1, 200);

        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, recipient_id, origin_id, post_id, comment_id,
                   message, is_read, created_at
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(recipient_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET is_read = TRUE
            WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(recipient_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE recipient_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(recipient_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
