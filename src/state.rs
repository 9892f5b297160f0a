use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::storage::{MemStorage, Storage};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Record store; constructed here and handed to every handler
    pub storage: Arc<dyn Storage>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState backed by a fresh in-memory store
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let storage = if config.seed_data {
            MemStorage::seeded().await?
        } else {
            MemStorage::new()
        };

        Ok(Self::with_storage(config, Arc::new(storage)))
    }

    /// Create AppState with a custom store (for testing)
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { storage, config }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Failed to seed storage: {0}")]
    Seed(#[from] AppError),
}
