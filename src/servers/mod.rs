//! Servers. Services that can be started and stopped.
pub mod apis;
pub mod signals;
