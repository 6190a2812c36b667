//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use blog_cache::{RedisCooldownStore, RedisPool, RedisPoolConfig};
use blog_common::{AppConfig, AppError, JwtService};
use blog_core::SnowflakeGenerator;
use blog_db::{
    create_pool, PgCommentRepository, PgNotificationRepository, PgPostRepository,
    PgReactionRepository, PgReviewRepository, PgSubscriptionRepository, PgUserRepository,
    PgVoteRepository,
};
use blog_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate-limited stack so probes never get 429s.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = blog_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let cooldown_store = Arc::new(RedisCooldownStore::new(redis_pool.clone()));

    let service_context = ServiceContextBuilder::new()
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool.clone())))
        .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .subscription_repo(Arc::new(PgSubscriptionRepository::new(pool.clone())))
        .cooldown_store(cooldown_store)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .reaction_cooldown(Duration::from_secs(config.engagement.reaction_cooldown_secs))
        .notification_page_size(config.engagement.notification_page_size)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
