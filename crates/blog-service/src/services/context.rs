//! Service context - dependency container for services
//!
//! Holds all repositories, the cooldown store, and other dependencies
//! needed by services.

use std::sync::Arc;
use std::time::Duration;

use blog_common::auth::JwtService;
use blog_core::traits::{
    CommentRepository, CooldownStore, NotificationRepository, PostRepository, ReactionRepository,
    ReviewRepository, SubscriptionRepository, UserRepository, VoteRepository,
};
use blog_core::SnowflakeGenerator;

/// Default reaction toggle cooldown
const DEFAULT_REACTION_COOLDOWN: Duration = Duration::from_secs(2);

/// Default page size for notification listings
const DEFAULT_NOTIFICATION_PAGE_SIZE: i64 = 50;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The cooldown store for toggle rate limiting
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,

    // Cooldown store
    cooldown_store: Arc<dyn CooldownStore>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Tuning
    reaction_cooldown: Duration,
    notification_page_size: i64,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the subscription repository
    pub fn subscription_repo(&self) -> &dyn SubscriptionRepository {
        self.subscription_repo.as_ref()
    }

    // === Cooldown ===

    /// Get the cooldown store
    pub fn cooldown_store(&self) -> &dyn CooldownStore {
        self.cooldown_store.as_ref()
    }

    /// How long a user must wait between reaction toggles on one post
    pub fn reaction_cooldown(&self) -> Duration {
        self.reaction_cooldown
    }

    /// Page size for notification listings
    pub fn notification_page_size(&self) -> i64 {
        self.notification_page_size
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> blog_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("cooldown_store", &"...")
            .field("reaction_cooldown", &self.reaction_cooldown)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    subscription_repo: Option<Arc<dyn SubscriptionRepository>>,
    cooldown_store: Option<Arc<dyn CooldownStore>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    reaction_cooldown: Option<Duration>,
    notification_page_size: Option<i64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn subscription_repo(mut self, repo: Arc<dyn SubscriptionRepository>) -> Self {
        self.subscription_repo = Some(repo);
        self
    }

    pub fn cooldown_store(mut self, store: Arc<dyn CooldownStore>) -> Self {
        self.cooldown_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn reaction_cooldown(mut self, cooldown: Duration) -> Self {
        self.reaction_cooldown = Some(cooldown);
        self
    }

    pub fn notification_page_size(mut self, size: i64) -> Self {
        self.notification_page_size = Some(size);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            vote_repo: self
                .vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            review_repo: self
                .review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            subscription_repo: self
                .subscription_repo
                .ok_or_else(|| ServiceError::validation("subscription_repo is required"))?,
            cooldown_store: self
                .cooldown_store
                .ok_or_else(|| ServiceError::validation("cooldown_store is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            reaction_cooldown: self.reaction_cooldown.unwrap_or(DEFAULT_REACTION_COOLDOWN),
            notification_page_size: self
                .notification_page_size
                .unwrap_or(DEFAULT_NOTIFICATION_PAGE_SIZE),
        })
    }
}
