//! Cooldown stores - implementations of the `CooldownStore` port

mod memory_cooldown;
mod redis_cooldown;

pub use memory_cooldown::MemoryCooldownStore;
pub use redis_cooldown::RedisCooldownStore;
