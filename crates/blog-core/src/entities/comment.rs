//! Comment entity and the display-ranking rules

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
///
/// `author_id` is nullable: legacy rows created through the anonymous form
/// have no user reference. New comments always carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Option<Snowflake>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
    pub is_approved: bool,
    pub pinned: bool,
}

impl Comment {
    /// Create a new comment awaiting moderation
    pub fn new(id: Snowflake, post_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id: Some(author_id),
            content,
            created_at: Utc::now(),
            active: true,
            is_approved: false,
            pinned: false,
        }
    }

    /// Check whether the comment is shown to readers
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.active && self.is_approved
    }
}

/// A comment annotated with its vote aggregates
///
/// The score fields are derived from `CommentVote` rows at read time and are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredComment {
    pub comment: Comment,
    pub up_votes: i64,
    pub down_votes: i64,
    pub total_score: i64,
}

impl ScoredComment {
    /// Display order: pinned first, then score descending, oldest-first tiebreak.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .comment
            .pinned
            .cmp(&self.comment.pinned)
            .then(other.total_score.cmp(&self.total_score))
            .then(self.comment.created_at.cmp(&other.comment.created_at))
    }
}

/// Sort comments into their display order (stable total order).
pub fn rank_comments(comments: &mut [ScoredComment]) {
    comments.sort_by(ScoredComment::display_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scored(id: i64, pinned: bool, score: i64, minute: u32) -> ScoredComment {
        let mut comment = Comment::new(
            Snowflake::new(id),
            Snowflake::new(1),
            Snowflake::new(2),
            "text".to_string(),
        );
        comment.pinned = pinned;
        comment.is_approved = true;
        comment.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, minute, 0).unwrap();
        ScoredComment {
            comment,
            up_votes: score.max(0),
            down_votes: 0,
            total_score: score,
        }
    }

    #[test]
    fn test_pinned_precedes_all() {
        let mut comments = vec![scored(1, false, 100, 0), scored(2, true, -5, 1)];
        rank_comments(&mut comments);
        assert_eq!(comments[0].comment.id, Snowflake::new(2));
    }

    #[test]
    fn test_higher_score_first_within_unpinned() {
        let mut comments = vec![scored(1, false, 1, 0), scored(2, false, 3, 1)];
        rank_comments(&mut comments);
        assert_eq!(comments[0].comment.id, Snowflake::new(2));
    }

    #[test]
    fn test_score_tie_broken_by_oldest_first() {
        let mut comments = vec![scored(1, false, 2, 30), scored(2, false, 2, 10)];
        rank_comments(&mut comments);
        assert_eq!(comments[0].comment.id, Snowflake::new(2));
        assert_eq!(comments[1].comment.id, Snowflake::new(1));
    }

    #[test]
    fn test_order_is_total_and_deterministic() {
        let mut a = vec![
            scored(1, false, 0, 5),
            scored(2, true, 0, 6),
            scored(3, false, 7, 7),
            scored(4, true, 9, 8),
        ];
        let mut b = a.clone();
        b.reverse();
        rank_comments(&mut a);
        rank_comments(&mut b);
        assert_eq!(a, b);
        let ids: Vec<i64> = a.iter().map(|c| c.comment.id.into_inner()).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_visibility() {
        let mut comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(1),
            Snowflake::new(2),
            "hi".to_string(),
        );
        assert!(!comment.is_visible());
        comment.is_approved = true;
        assert!(comment.is_visible());
        comment.active = false;
        assert!(!comment.is_visible());
    }
}
