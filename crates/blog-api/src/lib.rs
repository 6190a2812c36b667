//! # blog-api
//!
//! REST API server for the engagement subsystem, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::run;
