//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, EngagementConfig,
    Environment, JwtConfig, RateLimitConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
