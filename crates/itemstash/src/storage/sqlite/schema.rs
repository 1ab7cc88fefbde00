//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the items table.
///
/// AUTOINCREMENT keeps ids monotonic: a deleted item's id is never handed
/// out again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, description)
VALUES (?1, ?2)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, description
FROM items
WHERE id = ?1
"#;

// No ORDER BY: rowid order in practice, not a contract.
pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name, description
FROM items
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, description = ?3
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;
