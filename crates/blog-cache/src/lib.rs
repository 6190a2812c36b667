//! # blog-cache
//!
//! Redis caching layer for toggle cooldown tracking.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Cooldown Store**: Atomic per-(user, post) rate-limit locks
//! - **Memory Store**: In-process fallback used by tests and single-node setups
//!
//! ## Example
//!
//! ```ignore
//! use blog_cache::{RedisCooldownStore, RedisPool, RedisPoolConfig};
//! use std::time::Duration;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cooldowns = RedisCooldownStore::new(pool);
//!
//! if cooldowns.try_acquire(user_id, post_id, Duration::from_secs(2)).await? {
//!     // proceed with the toggle
//! }
//! ```

pub mod cooldown;
pub mod pool;

// Re-export pool types
pub use pool::{create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult,
    SharedRedisPool};

// Re-export cooldown stores
pub use cooldown::{MemoryCooldownStore, RedisCooldownStore};
