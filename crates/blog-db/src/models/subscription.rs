//! Subscription database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::Subscription;
use blog_core::value_objects::Snowflake;

/// Database model for subscriptions table
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionModel {
    pub subscriber_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionModel> for Subscription {
    fn from(model: SubscriptionModel) -> Self {
        Self {
            subscriber_id: Snowflake::new(model.subscriber_id),
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
        }
    }
}
