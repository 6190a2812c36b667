//! Notification entity and message construction

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

use super::reaction::ReactionKind;

/// Notification entity
///
/// Mutated only to flip `is_read`; never auto-deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub recipient_id: Snowflake,
    pub origin_id: Snowflake,
    pub post_id: Snowflake,
    pub comment_id: Option<Snowflake>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn build(
        id: Snowflake,
        recipient_id: Snowflake,
        origin_id: Snowflake,
        post_id: Snowflake,
        comment_id: Option<Snowflake>,
        message: String,
    ) -> Self {
        Self {
            id,
            recipient_id,
            origin_id,
            post_id,
            comment_id,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Notification for a new comment on the recipient's post
    pub fn new_comment(
        id: Snowflake,
        recipient_id: Snowflake,
        origin_name: &str,
        origin_id: Snowflake,
        post_id: Snowflake,
        comment_id: Snowflake,
    ) -> Self {
        Self::build(
            id,
            recipient_id,
            origin_id,
            post_id,
            Some(comment_id),
            format!("@{origin_name} commented on your post."),
        )
    }

    /// Notification for an @-mention inside a comment
    ///
    /// Carries the comment reference so the reader can deep-link to it.
    pub fn mention(
        id: Snowflake,
        recipient_id: Snowflake,
        origin_name: &str,
        origin_id: Snowflake,
        post_id: Snowflake,
        comment_id: Snowflake,
    ) -> Self {
        Self::build(
            id,
            recipient_id,
            origin_id,
            post_id,
            Some(comment_id),
            format!("@{origin_name} mentioned you in a comment."),
        )
    }

    /// Notification for a first-time reaction on the recipient's post
    pub fn reaction(
        id: Snowflake,
        recipient_id: Snowflake,
        origin_name: &str,
        origin_id: Snowflake,
        post_id: Snowflake,
        kind: ReactionKind,
    ) -> Self {
        Self::build(
            id,
            recipient_id,
            origin_id,
            post_id,
            None,
            format!("@{origin_name} reacted with {kind} to your post."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_carries_comment_reference() {
        let notification = Notification::mention(
            Snowflake::new(1),
            Snowflake::new(2),
            "ana",
            Snowflake::new(3),
            Snowflake::new(4),
            Snowflake::new(5),
        );
        assert_eq!(notification.comment_id, Some(Snowflake::new(5)));
        assert!(!notification.is_read);
        assert!(notification.message.contains("@ana"));
    }

    #[test]
    fn test_reaction_message() {
        let notification = Notification::reaction(
            Snowflake::new(1),
            Snowflake::new(2),
            "bob",
            Snowflake::new(3),
            Snowflake::new(4),
            ReactionKind::Wow,
        );
        assert!(notification.comment_id.is_none());
        assert_eq!(notification.message, "@bob reacted with wow to your post.");
    }
}
