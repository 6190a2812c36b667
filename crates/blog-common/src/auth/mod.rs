//! Authentication - JWT handling

mod jwt;

pub use jwt::{Claims, JwtService};
