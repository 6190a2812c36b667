//! Engagement service
//!
//! Assembles the full engagement state of a post for one read: reaction
//! tallies, review aggregates, and ranked comments with per-viewer flags.

use std::collections::HashMap;

use tracing::instrument;

use blog_core::entities::rank_comments;
use blog_core::Snowflake;

use crate::dto::{CommentResponse, EngagementResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The complete engagement state of a published post.
    ///
    /// `viewer` is the authenticated reader, if any; it drives the per-viewer
    /// `my_reaction` and `my_vote` fields and the `has_reviewed` and
    /// `is_subscribed_to_author` flags.
    #[instrument(skip(self))]
    pub async fn get_engagement(
        &self,
        post_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<EngagementResponse> {
        // Drafts have no public engagement surface
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(blog_core::entities::Post::is_published)
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let reaction_rows = self.ctx.reaction_repo().count_by_kind(post.id).await?;
        let reactions = blog_core::entities::ReactionCounts::from_rows(&reaction_rows);

        let my_reaction = match viewer {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(post.id, user_id)
                .await?
                .map(|r| r.kind.to_string()),
            None => None,
        };

        let average_rating = self.ctx.review_repo().average_rating(post.id).await?;
        let review_count = self.ctx.review_repo().count(post.id).await?;

        let mut comments = self.ctx.comment_repo().find_visible_scored(post.id).await?;
        rank_comments(&mut comments);

        let my_votes: HashMap<Snowflake, i16> = match viewer {
            Some(user_id) => self
                .ctx
                .vote_repo()
                .find_by_post_user(post.id, user_id)
                .await?
                .into_iter()
                .map(|v| (v.comment_id, v.value.as_i16()))
                .collect(),
            None => HashMap::new(),
        };

        let comments = comments
            .iter()
            .map(|scored| {
                let my_vote = my_votes.get(&scored.comment.id).copied().unwrap_or(0);
                CommentResponse::from_scored(scored, my_vote)
            })
            .collect();

        // Both stay false for anonymous viewers and for the post's own author
        let (has_reviewed, is_subscribed_to_author) = match viewer {
            Some(user_id) if user_id != post.author_id => {
                let reviewed = self
                    .ctx
                    .review_repo()
                    .find(post.id, user_id)
                    .await?
                    .is_some();
                let subscribed = self
                    .ctx
                    .subscription_repo()
                    .exists(user_id, post.author_id)
                    .await?;
                (reviewed, subscribed)
            }
            _ => (false, false),
        };

        Ok(EngagementResponse {
            post_id: post.id.to_string(),
            reaction_total: reactions.total(),
            reactions,
            my_reaction,
            average_rating,
            review_count,
            has_reviewed,
            is_subscribed_to_author,
            comments,
        })
    }
}
