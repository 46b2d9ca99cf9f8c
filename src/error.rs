//! Library error types.

use thiserror::Error;

/// Errors surfaced while building menu input.
///
/// Rendering itself never fails: absent nodes are skipped and missing
/// optional fields render as omitted attributes.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to parse menu items")]
    Parse(#[from] serde_json::Error),
}
