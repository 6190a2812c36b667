//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CommentService, EngagementService, NotificationService, ReactionService, ReviewService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SubscriptionService,
    VoteService,
};
