//! Pluggable filter hooks invoked during rendering.
//!
//! The host customizes markup by implementing [`MenuFilters`] and overriding
//! the hooks it cares about; every method defaults to a pass-through. The
//! walker calls each hook at a fixed point and uses the returned value.

use crate::models::{MenuItem, RenderArgs};

/// Transformations applied at fixed points while rendering a menu item.
pub trait MenuFilters {
    /// Rewrite the CSS class list of a standard item's `<li>`.
    fn css_classes(
        &self,
        classes: Vec<String>,
        _item: &MenuItem,
        _args: &RenderArgs,
    ) -> Vec<String> {
        classes
    }

    /// Rewrite the id attribute of a standard item's `<li>`. Returning an
    /// empty string omits the attribute.
    fn item_id(&self, id: String, _item: &MenuItem, _args: &RenderArgs) -> String {
        id
    }

    /// Rewrite the anchor attributes (ordered name/value pairs) before they
    /// are escaped and emitted. Pairs with empty values are omitted.
    fn link_attributes(
        &self,
        attributes: Vec<(String, String)>,
        _item: &MenuItem,
        _args: &RenderArgs,
    ) -> Vec<(String, String)> {
        attributes
    }

    /// Rewrite the (already escaped) link text.
    fn title(&self, title: String, _item: &MenuItem) -> String {
        title
    }

    /// Rewrite the complete markup of one item before it is appended to the
    /// output.
    fn item_output(
        &self,
        output: String,
        _item: &MenuItem,
        _depth: usize,
        _args: &RenderArgs,
    ) -> String {
        output
    }
}

/// Default collaborator: every hook passes its input through unchanged.
pub struct NoFilters;

impl MenuFilters for NoFilters {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_pass_through() {
        let filters = NoFilters;
        let item = MenuItem::new(1, "Home", "/");
        let args = RenderArgs::default();

        let classes = filters.css_classes(vec!["a".into(), "b".into()], &item, &args);
        assert_eq!(classes, vec!["a".to_string(), "b".to_string()]);

        assert_eq!(filters.item_id("menu-item-1".into(), &item, &args), "menu-item-1");
        assert_eq!(filters.title("Home".into(), &item), "Home");
        assert_eq!(filters.item_output("<li>".into(), &item, 0, &args), "<li>");

        let atts = vec![("href".to_string(), "/".to_string())];
        assert_eq!(filters.link_attributes(atts.clone(), &item, &args), atts);
    }
}
