//! API middlewares.
pub mod auth;
