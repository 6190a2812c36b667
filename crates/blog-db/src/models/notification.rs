//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::Notification;
use blog_core::value_objects::Snowflake;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub recipient_id: i64,
    pub origin_id: i64,
    pub post_id: i64,
    pub comment_id: Option<i64>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            recipient_id: Snowflake::new(model.recipient_id),
            origin_id: Snowflake::new(model.origin_id),
            post_id: Snowflake::new(model.post_id),
            comment_id: model.comment_id.map(Snowflake::new),
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
