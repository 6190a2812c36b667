//! Comment vote database models

use sqlx::FromRow;

use blog_core::entities::{CommentVote, VoteValue};
use blog_core::error::DomainError;
use blog_core::traits::VoteCounts;
use blog_core::value_objects::Snowflake;

/// Database model for comment_votes table
#[derive(Debug, Clone, FromRow)]
pub struct CommentVoteModel {
    pub comment_id: i64,
    pub user_id: i64,
    pub value: i16,
}

impl TryFrom<CommentVoteModel> for CommentVote {
    type Error = DomainError;

    fn try_from(model: CommentVoteModel) -> Result<Self, Self::Error> {
        let value = VoteValue::from_i16(model.value).ok_or_else(|| {
            DomainError::DatabaseError(format!("invalid vote value: {}", model.value))
        })?;
        Ok(Self {
            comment_id: Snowflake::new(model.comment_id),
            user_id: Snowflake::new(model.user_id),
            value,
        })
    }
}

/// Aggregated vote tallies (from query)
#[derive(Debug, Clone, FromRow)]
pub struct VoteCountModel {
    pub up: i64,
    pub down: i64,
    pub total: i64,
}

impl From<VoteCountModel> for VoteCounts {
    fn from(model: VoteCountModel) -> Self {
        Self {
            up: model.up,
            down: model.down,
            total: model.total,
        }
    }
}
