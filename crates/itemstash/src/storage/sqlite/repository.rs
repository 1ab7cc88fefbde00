//! SQLite repository implementation.
//!
//! Implements the repository trait from `itemstash_core::storage` using
//! SQLite. Each operation runs as a single closure on the connection's
//! worker thread - the request-scoped unit of work. The closure either
//! completes or its error propagates; nothing is held across requests.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use itemstash_core::item::{Item, NewItem};
use itemstash_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::row_to_item;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to the single `items` table.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The items table is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn create_item(&self, draft: &NewItem) -> Result<Item> {
        let name = draft.name.clone();
        let description = draft.description.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ITEM, rusqlite::params![name, description])
                    .map_err(wrap_err)?;

                // Read the row back so the caller gets exactly what was
                // persisted, including the engine-assigned id.
                let id = conn.last_insert_rowid();
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_item).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn update_item(&self, id: i64, draft: &NewItem) -> Result<Item> {
        let name = draft.name.clone();
        let description = draft.description.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM, rusqlite::params![id, name, description])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }

                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_item).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ITEM, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }
}
