//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `blog-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations with aggregate queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::pool::{create_pool, DatabaseConfig};
//! use blog_db::repositories::PgReactionRepository;
//! use blog_core::traits::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgNotificationRepository, PgPostRepository, PgReactionRepository,
    PgReviewRepository, PgSubscriptionRepository, PgUserRepository, PgVoteRepository,
};
