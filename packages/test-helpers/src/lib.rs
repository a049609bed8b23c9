//! Helpers for testing the Downlog admin API.
pub mod configuration;
pub mod random;
