//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of the repository
//! trait using `rusqlite` for synchronous operations and `tokio-rusqlite`
//! for async wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
