//! Bulma navbar walker.
//!
//! Renders a CMS menu tree (flat menu-item records with parent linkage) into
//! nested Bulma navbar markup, and provides an administrator fallback shown
//! when no menu has been configured. Rendering is pure string construction:
//! the caller supplies the records, per-render arguments, and optional filter
//! hooks, and gets back a single HTML string.

pub mod error;
pub mod escape;
pub mod fallback;
pub mod hooks;
pub mod models;
pub mod walker;

pub use error::MenuError;
pub use fallback::{CapabilityCheck, FallbackArgs, MANAGE_OPTIONS, render_fallback};
pub use hooks::{MenuFilters, NoFilters};
pub use models::{MenuItem, RenderArgs, menu_items_from_json};
pub use walker::MenuTreeRenderer;
