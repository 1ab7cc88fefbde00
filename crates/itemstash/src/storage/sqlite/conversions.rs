//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without the async wrapper.

use rusqlite::Row;

use itemstash_core::item::Item;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, description
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let description: String = row.get(2)?;

    Ok(Item {
        id,
        name,
        description,
    })
}
