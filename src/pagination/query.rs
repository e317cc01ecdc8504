//! Query-string parameters for paginated endpoints
//!
//! Query values arrive as strings; the coercion to numbers is explicit here
//! rather than left to the deserializer, so a garbled `limit=abc` degrades to
//! the default instead of failing extraction with a 400.

use super::types::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_REQUESTED_PAGE};
use serde::Deserialize;

/// `limit` / `page` query parameters, both optional
///
/// Absent, empty, non-numeric, or non-positive values fall back to the
/// documented defaults (5 items per page, page 1). Fractional values are kept
/// as-is for `page` so the paginator's clamping policy applies; an in-range
/// fractional page is floored there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page size
    pub limit: Option<String>,
    /// Requested page number
    pub page: Option<String>,
}

impl PageQuery {
    /// Effective page size, defaulting to [`DEFAULT_ITEMS_PER_PAGE`]
    pub fn items_per_page(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map_or(DEFAULT_ITEMS_PER_PAGE, |n| n.floor() as usize)
    }

    /// Requested page, defaulting to [`DEFAULT_REQUESTED_PAGE`]
    ///
    /// Negative and oversized values pass through unchanged; the paginator
    /// clamps them into range.
    pub fn requested_page(&self) -> f64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .unwrap_or(DEFAULT_REQUESTED_PAGE)
    }
}
