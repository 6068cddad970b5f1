//! # Social Infrastructure
//!
//! Concrete implementations of the ports defined in `social-core`.
//! This crate contains the database entity, pool construction, and the
//! PostgreSQL repository backing the posts endpoints.

pub mod database;

pub use database::{DatabaseConfig, PostgresPostRepository};
