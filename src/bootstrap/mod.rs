//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. Currently there is only one job, the
//! admin API server. The main application setup has only two stages:
//!
//! 1. Setup the domain layer: the download log service.
//! 2. Launch the application services as concurrent jobs.
pub mod app;
pub mod jobs;
pub mod logging;
