//! Pagination module
//!
//! Computes page windows and navigation metadata over in-memory collections.
//!
//! # Overview
//!
//! The pagination module slices a pre-fetched, pre-ordered collection into a
//! 1-based page window and derives the navigational metadata (total count,
//! previous/next page) describing it. Out-of-range and fractional page
//! requests are clamped to the nearest valid page rather than rejected:
//! pagination is a best-effort navigational aid, not a validating boundary.

mod paginator;
mod query;
mod types;

pub use paginator::Paginator;
pub use query::PageQuery;
pub use types::{Page, PageMetadata, DEFAULT_ITEMS_PER_PAGE, DEFAULT_REQUESTED_PAGE};
