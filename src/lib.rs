//! course-group-copy library
//!
//! Exposes the internal modules so integration tests can drive the client
//! and copy engine directly. The CLI binary is in main.rs.

pub mod api;
pub mod auth;
pub mod config;
pub mod copier;
pub mod error;
pub mod logging;
pub mod models;
