//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod notification;
mod post;
mod reaction;
mod review;
mod subscription;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use review::PgReviewRepository;
pub use subscription::PgSubscriptionRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
