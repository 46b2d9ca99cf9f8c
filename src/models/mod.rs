//! Data records consumed by the menu walker.

mod menu_item;

pub use menu_item::{MenuItem, RenderArgs, menu_items_from_json};
