//! Reaction service
//!
//! Handles the rate-limited reaction toggle on posts and reaction tallies.

use tracing::{info, instrument, warn};

use blog_core::entities::{Notification, Reaction, ReactionCounts, ReactionKind, ToggleAction};
use blog_core::Snowflake;

use crate::dto::ToggleReactionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction on a post.
    ///
    /// One atomic cooldown check guards the whole operation; a blocked toggle
    /// changes nothing. The transition is:
    /// - no reaction -> requested kind (`added`)
    /// - same kind -> removed (`removed`)
    /// - different kind -> requested kind (`changed`)
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: &str,
    ) -> ServiceResult<ToggleReactionResponse> {
        let kind: ReactionKind = kind.parse()?;

        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        // The cooldown slot is claimed before any write; a denied claim
        // leaves the stored reaction untouched.
        let acquired = self
            .ctx
            .cooldown_store()
            .try_acquire(user_id, post_id, self.ctx.reaction_cooldown())
            .await?;
        if !acquired {
            return Err(ServiceError::RateLimited);
        }

        let existing = self.ctx.reaction_repo().find(post_id, user_id).await?;

        let action = match existing {
            Some(ref current) if current.kind == kind => {
                self.ctx.reaction_repo().delete(post_id, user_id).await?;
                ToggleAction::Removed
            }
            Some(_) => {
                self.ctx
                    .reaction_repo()
                    .update_kind(post_id, user_id, kind)
                    .await?;
                ToggleAction::Changed
            }
            None => {
                let reaction = Reaction::new(post_id, user_id, kind);
                if self.ctx.reaction_repo().try_create(&reaction).await? {
                    ToggleAction::Added
                } else {
                    // Lost an insert race; treat the request as a change
                    self.ctx
                        .reaction_repo()
                        .update_kind(post_id, user_id, kind)
                        .await?;
                    ToggleAction::Changed
                }
            }
        };

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %kind,
            action = ?action,
            "Reaction toggled"
        );

        if action == ToggleAction::Added && post.author_id != user_id {
            self.notify_author(&post.author_id, user_id, post_id, kind)
                .await;
        }

        let counts = self.counts(post_id).await?;
        let kind = match action {
            ToggleAction::Removed => None,
            ToggleAction::Added | ToggleAction::Changed => Some(kind.to_string()),
        };

        Ok(ToggleReactionResponse {
            action,
            kind,
            counts,
        })
    }

    /// Per-kind reaction tallies for a post; every kind is present, zeros kept
    #[instrument(skip(self))]
    pub async fn counts(&self, post_id: Snowflake) -> ServiceResult<ReactionCounts> {
        let rows = self.ctx.reaction_repo().count_by_kind(post_id).await?;
        Ok(ReactionCounts::from_rows(&rows))
    }

    /// Best-effort notification to the post author; failures are logged only
    async fn notify_author(
        &self,
        author_id: &Snowflake,
        reactor_id: Snowflake,
        post_id: Snowflake,
        kind: ReactionKind,
    ) {
        let result = async {
            let reactor = self
                .ctx
                .user_repo()
                .find_by_id(reactor_id)
                .await?
                .ok_or(blog_core::DomainError::UserNotFound(reactor_id))?;

            let notification = Notification::reaction(
                self.ctx.generate_id(),
                *author_id,
                &reactor.username,
                reactor_id,
                post_id,
                kind,
            );
            self.ctx.notification_repo().create(&notification).await
        }
        .await;

        if let Err(e) = result {
            warn!(post_id = %post_id, error = %e, "Failed to notify author of reaction");
        }
    }
}
