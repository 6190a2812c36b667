//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentVote, Notification, Post, Reaction, ReactionKind, Review, ScoredComment,
    Subscription, User, VoteValue,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction on a post
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction; returns false when a row already exists for the pair
    async fn try_create(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Change the kind of an existing reaction in place
    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()>;

    /// Remove a user's reaction from a post
    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// Count reactions on a post, grouped by kind (absent kinds omitted)
    async fn count_by_kind(&self, post_id: Snowflake) -> RepoResult<Vec<(ReactionKind, i64)>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List visible comments on a post with vote aggregates, unordered
    async fn find_visible_scored(&self, post_id: Snowflake) -> RepoResult<Vec<ScoredComment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Set the pinned flag
    async fn set_pinned(&self, id: Snowflake, pinned: bool) -> RepoResult<()>;

    /// Set the moderation approval flag
    async fn set_approved(&self, id: Snowflake, approved: bool) -> RepoResult<()>;

    /// Soft delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Vote tallies for one comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteCounts {
    pub up: i64,
    pub down: i64,
    pub total: i64,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Fetch the row for (comment, user), inserting a neutral one if absent
    async fn get_or_create(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<CommentVote>;

    /// Overwrite the stored value for (comment, user)
    async fn update_value(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        value: VoteValue,
    ) -> RepoResult<()>;

    /// Tallies for a single comment
    async fn counts(&self, comment_id: Snowflake) -> RepoResult<VoteCounts>;

    /// All of a user's non-neutral votes across a post's comments
    async fn find_by_post_user(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Vec<CommentVote>>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a user's review of a post
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Review>>;

    /// Insert a review; returns false when the user already reviewed the post
    async fn try_create(&self, review: &Review) -> RepoResult<bool>;

    /// Mean rating over all reviews of a post, None when there are none
    async fn average_rating(&self, post_id: Snowflake) -> RepoResult<Option<f64>>;

    /// Number of reviews on a post
    async fn count(&self, post_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// List a user's notifications, newest first
    async fn find_by_recipient(
        &self,
        recipient_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Notification>>;

    /// Mark one notification read; returns false when it does not belong
    /// to the recipient or does not exist
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<bool>;

    /// Number of unread notifications for a user
    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Subscription Repository
// ============================================================================

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a subscription; returns false when it already exists
    async fn try_create(&self, subscription: &Subscription) -> RepoResult<bool>;

    /// Remove a subscription; returns false when there was none
    async fn delete(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Check whether a subscription exists
    async fn exists(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// IDs of everyone following an author
    async fn find_subscribers(&self, author_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}
