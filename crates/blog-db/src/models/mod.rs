//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod notification;
mod post;
mod reaction;
mod review;
mod subscription;
mod user;
mod vote;

pub use comment::{CommentModel, ScoredCommentModel};
pub use notification::NotificationModel;
pub use post::PostModel;
pub use reaction::{ReactionCountModel, ReactionModel};
pub use review::ReviewModel;
pub use subscription::SubscriptionModel;
pub use user::UserModel;
pub use vote::{CommentVoteModel, VoteCountModel};
