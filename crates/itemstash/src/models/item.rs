use serde::{Deserialize, Serialize};

use itemstash_core::item::{Item, NewItem};

/// Query parameters for creating a new item.
///
/// The API takes plain scalar query parameters, not a JSON body.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
}

impl CreateItem {
    /// Converts the create request into a storage draft.
    pub fn into_draft(self) -> NewItem {
        NewItem::new(self.name, self.description)
    }
}

/// Query parameters for updating an item.
///
/// Both fields are required; the update overwrites them in place.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub description: String,
}

impl UpdateItem {
    /// Converts the update request into a storage draft.
    pub fn into_draft(self) -> NewItem {
        NewItem::new(self.name, self.description)
    }
}

/// Response envelope for mutating operations: a confirmation message
/// alongside the affected item.
#[derive(Debug, Serialize)]
pub struct ItemMessage {
    pub message: &'static str,
    pub item: Item,
}
