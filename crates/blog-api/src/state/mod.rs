//! Application state
//!
//! Holds the shared state for the Axum application. The service context owns
//! the repositories; the raw pools stay here so the readiness probe can check
//! dependency health directly.

use std::sync::Arc;

use blog_cache::RedisPool;
use blog_common::{AppConfig, JwtService};
use blog_db::PgPool;
use blog_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Database pool, kept for health checks
    db_pool: PgPool,
    /// Redis pool, kept for health checks
    redis_pool: RedisPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        db_pool: PgPool,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            db_pool,
            redis_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    /// Get the database pool
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Get the Redis pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
