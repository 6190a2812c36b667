//! Domain entities - core business objects

mod comment;
mod notification;
mod post;
mod reaction;
mod review;
mod subscription;
mod user;
mod vote;

pub use comment::{rank_comments, Comment, ScoredComment};
pub use notification::Notification;
pub use post::Post;
pub use reaction::{Reaction, ReactionCounts, ReactionKind, ToggleAction};
pub use review::Review;
pub use subscription::Subscription;
pub use user::User;
pub use vote::{CommentVote, VoteDirection, VoteValue};
