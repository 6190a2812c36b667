//! Comment service
//!
//! Handles comment creation with its notification fan-out, plus the
//! pin and moderation operations.

use tracing::{info, instrument, warn};

use blog_core::entities::{Comment, Notification, Post};
use blog_core::{DomainError, Snowflake};

use crate::dto::AddCommentRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::mentions::extract_mentions;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post.
    ///
    /// The comment is stored first; notifications to the post author and to
    /// mentioned users are best effort and never fail the operation.
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        request: AddCommentRequest,
    ) -> ServiceResult<Comment> {
        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        // Only published posts accept comments
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(Post::is_published)
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let comment = Comment::new(self.ctx.generate_id(), post_id, author_id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        self.notify(&post, &comment, author_id).await;

        Ok(comment)
    }

    /// Pin or unpin a comment. Allowed for staff and for the post author.
    #[instrument(skip(self))]
    pub async fn toggle_pin(
        &self,
        comment_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<bool> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        let post = self
            .ctx
            .post_repo()
            .find_by_id(comment.post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", comment.post_id.to_string()))?;

        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::UserNotFound(actor_id))?;

        if !actor.can_moderate() && post.author_id != actor_id {
            return Err(DomainError::StaffOnly.into());
        }

        let pinned = !comment.pinned;
        self.ctx.comment_repo().set_pinned(comment_id, pinned).await?;

        info!(comment_id = %comment_id, pinned, "Comment pin toggled");
        Ok(pinned)
    }

    /// Approve a pending comment. Staff only.
    #[instrument(skip(self))]
    pub async fn approve(&self, comment_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        self.require_staff(actor_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        self.ctx.comment_repo().set_approved(comment.id, true).await?;
        info!(comment_id = %comment_id, "Comment approved");
        Ok(())
    }

    /// Reject a comment by soft-deleting it. Staff only.
    #[instrument(skip(self))]
    pub async fn reject(&self, comment_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        self.require_staff(actor_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        self.ctx.comment_repo().delete(comment.id).await?;
        info!(comment_id = %comment_id, "Comment rejected");
        Ok(())
    }

    async fn require_staff(&self, actor_id: Snowflake) -> ServiceResult<()> {
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::UserNotFound(actor_id))?;
        if !actor.can_moderate() {
            return Err(DomainError::StaffOnly.into());
        }
        Ok(())
    }

    /// Best-effort notification fan-out; every failure is logged and swallowed
    async fn notify(&self, post: &Post, comment: &Comment, author_id: Snowflake) {
        let commenter = match self.ctx.user_repo().find_by_id(author_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(user_id = %author_id, "Commenter not found, skipping notifications");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load commenter, skipping notifications");
                return;
            }
        };

        if post.author_id != author_id {
            let notification = Notification::new_comment(
                self.ctx.generate_id(),
                post.author_id,
                &commenter.username,
                author_id,
                post.id,
                comment.id,
            );
            if let Err(e) = self.ctx.notification_repo().create(&notification).await {
                warn!(comment_id = %comment.id, error = %e, "Failed to notify post author");
            }
        }

        for username in extract_mentions(&comment.content) {
            let mentioned = match self.ctx.user_repo().find_by_username(&username).await {
                Ok(Some(user)) => user,
                Ok(None) => continue,
                Err(e) => {
                    warn!(username, error = %e, "Mention lookup failed");
                    continue;
                }
            };

            // Self-mentions and a mention of the already-notified post author
            // produce no extra notification
            if mentioned.id == author_id || mentioned.id == post.author_id {
                continue;
            }

            let notification = Notification::mention(
                self.ctx.generate_id(),
                mentioned.id,
                &commenter.username,
                author_id,
                post.id,
                comment.id,
            );
            if let Err(e) = self.ctx.notification_repo().create(&notification).await {
                warn!(comment_id = %comment.id, error = %e, "Failed to notify mentioned user");
            }
        }
    }
}
