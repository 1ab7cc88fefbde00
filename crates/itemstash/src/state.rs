//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage handle is constructed explicitly at
//! process start and injected here - there is no global engine or
//! session-factory state.

use std::sync::Arc;

use itemstash_core::storage::ItemRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for database access.
#[derive(Clone)]
pub struct AppState {
    /// Item repository backed by the SQLite storage engine.
    pub item_repo: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates AppState with SQLite storage at the configured path.
    ///
    /// The database file and the items table are created if absent.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;

        Ok(Self {
            item_repo: Arc::new(repo),
        })
    }
}
