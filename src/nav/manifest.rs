//! Loading the navigation manifest.

use thiserror::Error;

use super::NavEntry;

/// Errors from loading the navigation manifest.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for navigation manifest operations.
pub type NavResult<T> = Result<T, NavError>;

/// Parse a navigation manifest into the entry forest.
pub fn from_json(raw: &str) -> NavResult<Vec<NavEntry>> {
    Ok(serde_json::from_str(raw)?)
}
