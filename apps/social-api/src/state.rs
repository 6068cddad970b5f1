//! Application state - shared across all handlers.

use std::sync::Arc;

use social_core::error::RepoError;
use social_core::ports::PostRepository;
use social_infra::database::{self, DatabaseConfig, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect the database pool and build the state.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = database::connect(config).await?;

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(db)),
        })
    }
}
