//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::{Reaction, ReactionKind};
use blog_core::error::DomainError;
use blog_core::value_objects::Snowflake;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub post_id: i64,
    pub user_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            kind: model.kind.parse::<ReactionKind>()?,
            created_at: model.created_at,
        })
    }
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub kind: String,
    pub count: i64,
}
