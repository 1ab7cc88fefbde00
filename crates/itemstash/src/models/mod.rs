mod item;

pub use item::{CreateItem, ItemMessage, UpdateItem};
