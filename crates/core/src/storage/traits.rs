use async_trait::async_trait;

use crate::item::{Item, NewItem};

use super::Result;

/// Repository for item operations.
///
/// One implementation call is one unit of work against the storage engine;
/// nothing is cached across calls.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists a new item and returns it with its engine-assigned id.
    async fn create_item(&self, draft: &NewItem) -> Result<Item>;

    /// Gets every stored item.
    ///
    /// No ordering guarantee beyond the storage-engine default, and no
    /// pagination - the whole table comes back in one call.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its id.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Overwrites an existing item's fields in place, keeping its id.
    ///
    /// Returns `RepositoryError::NotFound` if no item has that id.
    async fn update_item(&self, id: i64, draft: &NewItem) -> Result<Item>;

    /// Deletes an item by its id.
    ///
    /// Returns `RepositoryError::NotFound` if no item has that id.
    async fn delete_item(&self, id: i64) -> Result<()>;
}
