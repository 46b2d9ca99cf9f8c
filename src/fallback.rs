//! Administrator fallback shown when no menu has been configured.
//!
//! Visitors get nothing; a user holding the site-options capability gets a
//! call-to-action linking to the host's menu manager, optionally wrapped in
//! the caller's container tag. Container id/class and the admin URL come
//! from trusted caller configuration and are written through verbatim.

use std::fmt;

/// Capability required to see the fallback call-to-action.
pub const MANAGE_OPTIONS: &str = "manage_options";

/// Authorization seam over the host environment.
pub trait CapabilityCheck {
    /// Whether the current user holds the named capability.
    fn current_user_can(&self, capability: &str) -> bool;
}

/// Configuration for the fallback renderer.
#[derive(Debug, Clone)]
pub struct FallbackArgs {
    /// Wrapper tag (e.g. "nav" or "div"); `None` renders the bare item.
    pub container: Option<String>,

    /// Optional id for the wrapper tag.
    pub container_id: String,

    /// Optional class for the wrapper tag.
    pub container_class: String,

    /// When non-empty, the list item gets a `nav-item` class.
    pub menu_class: String,

    /// Destination of the "Add a menu" link.
    pub admin_url: String,
}

impl Default for FallbackArgs {
    fn default() -> Self {
        Self {
            container: Some("div".to_string()),
            container_id: String::new(),
            container_class: String::new(),
            menu_class: String::new(),
            admin_url: "/admin/menus".to_string(),
        }
    }
}

/// Write the no-menu fallback markup to `out`.
///
/// Produces nothing unless the current user holds [`MANAGE_OPTIONS`].
pub fn render_fallback(
    args: &FallbackArgs,
    caps: &dyn CapabilityCheck,
    out: &mut impl fmt::Write,
) -> fmt::Result {
    if !caps.current_user_can(MANAGE_OPTIONS) {
        return Ok(());
    }

    if let Some(container) = &args.container {
        write!(out, "<{container}")?;
        if !args.container_id.is_empty() {
            write!(out, " id=\"{}\"", args.container_id)?;
        }
        if !args.container_class.is_empty() {
            write!(out, " class=\"{}\"", args.container_class)?;
        }
        out.write_str(">")?;
    }

    out.write_str("<li")?;
    if !args.menu_class.is_empty() {
        out.write_str(" class=\"nav-item\"")?;
    }
    out.write_str(">")?;
    write!(
        out,
        "<a class=\"button is-danger is-outlined\" href=\"{}\">Add a menu</a>",
        args.admin_url
    )?;
    out.write_str("</li>")?;

    if let Some(container) = &args.container {
        write!(out, "</{container}>")?;
    }

    Ok(())
}
