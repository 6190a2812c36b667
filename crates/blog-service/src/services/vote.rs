//! Vote service
//!
//! Handles up/down vote toggles on comments. Votes are not rate limited;
//! the stored row flips directly between directions.

use tracing::{info, instrument};

use blog_core::entities::VoteDirection;
use blog_core::Snowflake;

use crate::dto::ToggleVoteResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a vote on a comment.
    ///
    /// Re-clicking the current direction clears the vote; requesting the
    /// opposite direction flips to it in one step.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        direction: &str,
    ) -> ServiceResult<ToggleVoteResponse> {
        let direction: VoteDirection = direction.parse()?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.is_visible())
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        let current = self
            .ctx
            .vote_repo()
            .get_or_create(comment_id, user_id)
            .await?;

        let next = current.value.toggled(direction.target());
        if next != current.value {
            self.ctx
                .vote_repo()
                .update_value(comment_id, user_id, next)
                .await?;
        }

        info!(
            comment_id = %comment.id,
            user_id = %user_id,
            value = next.as_i16(),
            "Vote toggled"
        );

        let counts = self.ctx.vote_repo().counts(comment_id).await?;

        Ok(ToggleVoteResponse {
            current_value: next.as_i16(),
            up_votes: counts.up,
            down_votes: counts.down,
            total_score: counts.total,
        })
    }
}
