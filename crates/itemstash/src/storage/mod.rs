//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the repository
//! trait defined in `itemstash_core::storage`, backed by a single embedded
//! SQLite database file.

pub mod sqlite;

pub use sqlite::SqliteRepository;
