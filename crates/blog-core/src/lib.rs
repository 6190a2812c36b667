//! # blog-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! cooldown-store port. This crate has zero dependencies on infrastructure
//! (database, cache, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentVote, Notification, Post, Reaction, ReactionCounts, ReactionKind, Review,
    ScoredComment, Subscription, ToggleAction, User, VoteDirection, VoteValue, rank_comments,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, CooldownStore, NotificationRepository, PostRepository, ReactionRepository,
    RepoResult, ReviewRepository, SubscriptionRepository, UserRepository, VoteCounts,
    VoteRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
