//! Value objects - identifier types shared across the domain

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
