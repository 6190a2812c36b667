//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod engagement;
pub mod error;
pub mod mentions;
pub mod notification;
pub mod reaction;
pub mod review;
pub mod subscription;
pub mod vote;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use reaction::ReactionService;
pub use review::ReviewService;
pub use subscription::SubscriptionService;
pub use vote::VoteService;
