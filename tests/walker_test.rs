#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end menu rendering tests.
//!
//! Exercises the public API the way a host theme would: parse menu records
//! from JSON, render them with default arguments, and fall back to the
//! admin call-to-action when the menu is empty.

use bulma_navwalker::{
    CapabilityCheck, FallbackArgs, MANAGE_OPTIONS, MenuItem, MenuTreeRenderer, RenderArgs,
    menu_items_from_json, render_fallback,
};

struct SiteAdmin;

impl CapabilityCheck for SiteAdmin {
    fn current_user_can(&self, capability: &str) -> bool {
        capability == MANAGE_OPTIONS
    }
}

struct Visitor;

impl CapabilityCheck for Visitor {
    fn current_user_can(&self, _capability: &str) -> bool {
        false
    }
}

fn main_menu() -> Vec<MenuItem> {
    menu_items_from_json(
        r#"[
        {"id": 1, "title": "Home", "url": "/", "classes": ["current-menu-item"]},
        {"id": 2, "title": "Products", "url": "/products"},
        {"id": 3, "parent_id": 2, "title": "Widgets", "url": "/products/widgets"},
        {"id": 4, "parent_id": 2, "title": "divider"},
        {"id": 5, "parent_id": 2, "title": "Support", "attr_title": "dropdown-header"},
        {"id": 6, "parent_id": 2, "title": "Docs", "url": "/docs"},
        {"id": 7, "parent_id": 6, "title": "API", "url": "/docs/api"},
        {"id": 8, "title": "Coming Soon", "url": "/soon", "attr_title": "disabled"}
    ]"#,
    )
    .unwrap()
}

#[test]
fn test_full_menu_structure() {
    let html = MenuTreeRenderer::new().render(&main_menu(), &RenderArgs::default(), 0);

    // Current page item is marked active.
    assert!(html.contains("current-menu-item navbar-item menu-item-1 active"));

    // Products is the dropdown trigger.
    assert!(html.contains("has-dropdown is-hoverable"));
    assert!(html.contains("aria-haspopup=\"true\""));
    assert!(html.contains(" <span class=\"caret\"></span></a>"));

    // Depth-1 special cases.
    assert!(html.contains("<li role=\"presentation\" class=\"divider\"></li>"));
    assert!(html.contains("<li role=\"presentation\" class=\"dropdown-header\">Support</li>"));

    // Disabled works at the top level.
    assert!(html.contains(
        "<li role=\"presentation\" class=\"disabled\"><a href=\"#\">Coming Soon</a></li>"
    ));

    // First nested wrapper is bare, the deeper one is a dropdown.
    assert!(html.contains("<ul class=\"\">"));
    assert!(html.contains("<ul class=\"navbar-dropdown\">"));
}

#[test]
fn test_max_depth_two_hides_third_level() {
    let html = MenuTreeRenderer::new().render(&main_menu(), &RenderArgs::default(), 2);
    assert!(html.contains("Docs"));
    assert!(!html.contains("API"));
}

#[test]
fn test_markup_injection_is_neutralized() {
    let items = menu_items_from_json(
        r#"[
        {"id": 1, "title": "<script>alert(1)</script>", "url": "javascript:alert(1)"}
    ]"#,
    )
    .unwrap();
    let html = MenuTreeRenderer::new().render(&items, &RenderArgs::default(), 0);

    assert!(!html.contains("<script>"));
    assert!(!html.contains("javascript:"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_fallback_for_admin_and_visitor() {
    let args = FallbackArgs {
        container: Some("nav".to_string()),
        ..FallbackArgs::default()
    };

    let mut html = String::new();
    render_fallback(&args, &SiteAdmin, &mut html).unwrap();
    assert!(html.starts_with("<nav>"));
    assert!(html.contains("Add a menu"));
    assert!(html.ends_with("</nav>"));

    let mut empty = String::new();
    render_fallback(&args, &Visitor, &mut empty).unwrap();
    assert!(empty.is_empty());
}
