//! Menu item record and per-render arguments.
//!
//! Menu items arrive as a flat, ordered list built by the host's menu
//! storage; hierarchy is expressed through `parent_id`. The walker treats
//! the list as read-only and derives child relationships itself.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Class marking the menu item that matches the current page.
pub const CURRENT_ITEM_CLASS: &str = "current-menu-item";

/// One navigable entry in a menu tree.
///
/// Optional text fields default to the empty string, which renders as an
/// omitted attribute. `attr_title` is overloaded: the values `divider`,
/// `dropdown-header`, and `disabled` (case-insensitive) select special
/// markup, and any other non-empty value is used as an icon class on a
/// glyph span inside the link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within one render call.
    pub id: u64,

    /// Parent item for hierarchy; `None` for top-level items.
    #[serde(default)]
    pub parent_id: Option<u64>,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Link destination.
    #[serde(default)]
    pub url: String,

    /// Link target (e.g. "_blank").
    #[serde(default)]
    pub target: String,

    /// Link relationship (XFN) attribute.
    #[serde(default)]
    pub rel: String,

    /// Title attribute, overloaded as divider/header/disabled marker or
    /// icon class.
    #[serde(default)]
    pub attr_title: String,

    /// CSS classes assigned by the menu manager, in order.
    #[serde(default)]
    pub classes: Vec<String>,
}

impl MenuItem {
    /// Create a bare item with just an id, title, and url.
    pub fn new(id: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            title: title.into(),
            url: url.into(),
            target: String::new(),
            rel: String::new(),
            attr_title: String::new(),
            classes: Vec::new(),
        }
    }

    /// Whether this item is marked as the current page's menu item.
    pub fn is_current(&self) -> bool {
        self.classes.iter().any(|c| c == CURRENT_ITEM_CLASS)
    }
}

/// Per-render configuration: text emitted around each item and its link.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Text before the whole anchor, inside the `<li>`.
    pub before: String,

    /// Text after the whole anchor.
    pub after: String,

    /// Text just inside the anchor, before the title.
    pub link_before: String,

    /// Text just inside the anchor, after the title.
    pub link_after: String,
}

/// Parse a JSON array of menu items, as handed over by the host's menu
/// storage.
pub fn menu_items_from_json(json: &str) -> Result<Vec<MenuItem>, MenuError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_item() {
        let items = menu_items_from_json(r#"[{"id": 7, "title": "Home", "url": "/"}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
        assert_eq!(items[0].parent_id, None);
        assert!(items[0].target.is_empty());
        assert!(items[0].classes.is_empty());
    }

    #[test]
    fn parse_full_item() {
        let json = r#"[{
            "id": 2, "parent_id": 1, "title": "About", "url": "/about",
            "target": "_blank", "rel": "me", "attr_title": "fa-user",
            "classes": ["current-menu-item"]
        }]"#;
        let items = menu_items_from_json(json).unwrap();
        assert_eq!(items[0].parent_id, Some(1));
        assert!(items[0].is_current());
    }

    #[test]
    fn parse_malformed_payload() {
        let err = menu_items_from_json("{not json").unwrap_err();
        assert!(matches!(err, MenuError::Parse(_)));
    }

    #[test]
    fn is_current_requires_exact_class() {
        let mut item = MenuItem::new(1, "Home", "/");
        item.classes = vec!["current-menu-item-ancestor".into()];
        assert!(!item.is_current());
        item.classes.push(CURRENT_ITEM_CLASS.into());
        assert!(item.is_current());
    }
}
