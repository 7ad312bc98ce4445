//! # HR Platform Fixture Loader
//!
//! Library for seeding the HR platform database with demo and minimal
//! fixture data: configuration, schema migrations, entity models, and the
//! seed unit orchestrator.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod seeds;
pub use migration;
