use serde::{Deserialize, Serialize};

/// A stored item.
///
/// The `id` is assigned by the storage engine on insert and never changes
/// (or gets reused) afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item with a known id (row mapping and tests).
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The mutable fields of an item, as accepted by create and update.
///
/// No validation beyond type coercion: empty or arbitrarily long strings
/// and duplicate names are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Builds the stored item once the engine has assigned an id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
