//! Ports - traits the infrastructure layer implements

mod cooldown;
mod repositories;

pub use cooldown::CooldownStore;
pub use repositories::{
    CommentRepository, NotificationRepository, PostRepository, ReactionRepository, RepoResult,
    ReviewRepository, SubscriptionRepository, UserRepository, VoteCounts, VoteRepository,
};
