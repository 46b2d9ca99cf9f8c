//! Menu tree walker.
//!
//! Walks an ordered list of menu item records (hierarchy expressed through
//! `parent_id`) pre-order, depth-first, and emits nested Bulma navbar
//! markup. Each list tag is indented with one tab per depth level, purely
//! cosmetic. The walker never mutates its input and never fails: orphaned
//! items render at the top level, missing fields render as omitted
//! attributes.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::escape::{esc_attr, esc_url};
use crate::hooks::{MenuFilters, NoFilters};
use crate::models::{MenuItem, RenderArgs};

/// Renders a forest of menu items to a single HTML string.
pub struct MenuTreeRenderer {
    filters: Box<dyn MenuFilters>,
}

impl MenuTreeRenderer {
    /// Create a renderer with pass-through filter hooks.
    pub fn new() -> Self {
        Self {
            filters: Box::new(NoFilters),
        }
    }

    /// Create a renderer with custom filter hooks.
    pub fn with_filters(filters: Box<dyn MenuFilters>) -> Self {
        Self { filters }
    }

    /// Render the menu tree.
    ///
    /// `max_depth` is the number of levels rendered; 0 means unlimited.
    /// Siblings keep their input order. An empty input yields an empty
    /// string.
    pub fn render(&self, items: &[MenuItem], args: &RenderArgs, max_depth: usize) -> String {
        let ids: HashSet<u64> = items.iter().map(|item| item.id).collect();

        // Index children by parent, preserving input order. Items whose
        // parent is unknown (or is themselves) are treated as roots.
        let mut children: HashMap<u64, Vec<&MenuItem>> = HashMap::new();
        let mut roots: Vec<&MenuItem> = Vec::new();
        for item in items {
            match item.parent_id {
                Some(parent) if parent != item.id && ids.contains(&parent) => {
                    children.entry(parent).or_default().push(item);
                }
                Some(parent) => {
                    warn!(
                        item = item.id,
                        parent, "menu item references unknown parent, rendering at top level"
                    );
                    roots.push(item);
                }
                None => roots.push(item),
            }
        }

        let mut output = String::new();
        for root in roots {
            self.display_element(root, &children, max_depth, 0, args, &mut output);
        }

        debug!(
            items = items.len(),
            max_depth,
            bytes = output.len(),
            "rendered menu tree"
        );
        output
    }

    /// Render one element and, depth permitting, its children.
    fn display_element(
        &self,
        item: &MenuItem,
        children: &HashMap<u64, Vec<&MenuItem>>,
        max_depth: usize,
        depth: usize,
        args: &RenderArgs,
        output: &mut String,
    ) {
        let kids = children.get(&item.id).map(Vec::as_slice).unwrap_or(&[]);
        let has_children = !kids.is_empty();

        self.start_element(output, item, depth, has_children, args);

        // Dividers render no children; deeper levels are cut off by
        // max_depth (a child at depth d+1 renders only when d+1 < max).
        let descend =
            has_children && !is_divider(item, depth) && (max_depth == 0 || depth + 1 < max_depth);
        if descend {
            self.start_level(output, depth + 1);
            for child in kids {
                self.display_element(child, children, max_depth, depth + 1, args, output);
            }
            self.end_level(output, depth + 1);
        }

        self.end_element(output);
    }

    /// Open the list wrapper around the children at nesting level `level`.
    ///
    /// The first nested level gets no class: it is the top dropdown itself.
    /// Every deeper wrapper is a `navbar-dropdown`, which keeps classes
    /// correct when siblings nest further (only exactly level 1 is exempt).
    fn start_level(&self, output: &mut String, level: usize) {
        let class = if level == 1 { "" } else { "navbar-dropdown" };
        output.push_str(&format!("{}<ul class=\"{class}\">", tabs(level - 1)));
    }

    /// Close the list wrapper opened by `start_level`.
    fn end_level(&self, output: &mut String, level: usize) {
        output.push_str(&tabs(level - 1));
        output.push_str("</ul>");
    }

    /// Emit one item's `<li>` and link markup.
    ///
    /// Special-cased items (divider, dropdown header, disabled) are matched
    /// case-insensitively, first rule wins. Anything else is a standard
    /// item; a leftover non-empty `attr_title` then selects a glyph icon
    /// inside the link.
    fn start_element(
        &self,
        output: &mut String,
        item: &MenuItem,
        depth: usize,
        has_children: bool,
        args: &RenderArgs,
    ) {
        let indent = tabs(depth);

        if is_divider(item, depth) {
            output.push_str(&format!(
                "{indent}<li role=\"presentation\" class=\"divider\">"
            ));
        } else if depth == 1 && item.attr_title.eq_ignore_ascii_case("dropdown-header") {
            output.push_str(&format!(
                "{indent}<li role=\"presentation\" class=\"dropdown-header\">{}",
                esc_attr(&item.title)
            ));
        } else if item.attr_title.eq_ignore_ascii_case("disabled") {
            output.push_str(&format!(
                "{indent}<li role=\"presentation\" class=\"disabled\"><a href=\"#\">{}</a>",
                esc_attr(&item.title)
            ));
        } else {
            self.standard_element(output, item, depth, has_children, args, &indent);
        }
    }

    /// Emit a standard (non-special-cased) menu item.
    fn standard_element(
        &self,
        output: &mut String,
        item: &MenuItem,
        depth: usize,
        has_children: bool,
        args: &RenderArgs,
        indent: &str,
    ) {
        let mut classes: Vec<String> = item
            .classes
            .iter()
            .filter(|class| !class.is_empty())
            .cloned()
            .collect();
        classes.push(format!("navbar-item menu-item-{}", item.id));

        let classes = self.filters.css_classes(classes, item, args);
        let mut class_names = classes.join(" ");
        if has_children {
            class_names.push_str(" has-dropdown is-hoverable");
        }
        if item.is_current() {
            class_names.push_str(" active");
        }
        let class_attr = if class_names.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", esc_attr(&class_names))
        };

        let id = self
            .filters
            .item_id(format!("menu-item-{}", item.id), item, args);
        let id_attr = if id.is_empty() {
            String::new()
        } else {
            format!(" id=\"{}\"", esc_attr(&id))
        };

        output.push_str(&format!("{indent}<li{id_attr}{class_attr}>"));

        let mut atts: Vec<(String, String)> = vec![
            ("title".to_string(), item.title.clone()),
            ("target".to_string(), item.target.clone()),
            ("rel".to_string(), item.rel.clone()),
        ];
        // A top-level item with children is the dropdown trigger.
        if has_children && depth == 0 {
            atts.push(("class".to_string(), "navbar-link".to_string()));
            atts.push(("aria-haspopup".to_string(), "true".to_string()));
        }
        atts.push(("href".to_string(), item.url.clone()));

        let atts = self.filters.link_attributes(atts, item, args);

        let mut attributes = String::new();
        for (name, value) in &atts {
            if value.is_empty() {
                continue;
            }
            let escaped = if name == "href" {
                esc_url(value)
            } else {
                esc_attr(value)
            };
            // A rejected URL sanitizes to empty; drop the attribute.
            if escaped.is_empty() {
                continue;
            }
            attributes.push_str(&format!(" {name}=\"{escaped}\""));
        }

        let mut item_output = args.before.clone();
        if item.attr_title.is_empty() {
            item_output.push_str(&format!("<a{attributes}>"));
        } else {
            item_output.push_str(&format!(
                "<a{attributes}><span class=\"glyphicon {}\"></span>&nbsp;",
                esc_attr(&item.attr_title)
            ));
        }

        item_output.push_str(&args.link_before);
        item_output.push_str(&self.filters.title(esc_attr(&item.title), item));
        item_output.push_str(&args.link_after);

        if has_children && depth == 0 {
            item_output.push_str(" <span class=\"caret\"></span></a>");
        } else {
            item_output.push_str("</a>");
        }
        item_output.push_str(&args.after);

        output.push_str(&self.filters.item_output(item_output, item, depth, args));
    }

    /// Close an item's `<li>`.
    fn end_element(&self, output: &mut String) {
        output.push_str("</li>");
    }
}

impl Default for MenuTreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the item renders as a divider: either marker field says
/// "divider" (case-insensitive), and only at exactly depth 1.
fn is_divider(item: &MenuItem, depth: usize) -> bool {
    depth == 1
        && (item.attr_title.eq_ignore_ascii_case("divider")
            || item.title.eq_ignore_ascii_case("divider"))
}

/// Cosmetic tab indent for one depth level; depth 0 gets none.
fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}
