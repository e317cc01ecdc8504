//! The paginator: page resolution and window arithmetic
//!
//! Pure and deterministic: each call slices its own borrowed collection and
//! produces output with no shared state, no I/O, and no error paths. All
//! malformed inputs are normalized by clamping.

use super::query::PageQuery;
use super::types::{Page, PageMetadata, DEFAULT_ITEMS_PER_PAGE, DEFAULT_REQUESTED_PAGE};

/// Derives a page window and navigation metadata from an ordered collection
///
/// The collection is supplied explicitly per call. Page numbers are 1-based;
/// requests below 1 clamp to the first page, requests beyond the last page
/// clamp to the last, and fractional in-range requests are floored before
/// slicing.
///
/// # Examples
///
/// ```
/// use mealtime::pagination::Paginator;
///
/// let items: Vec<u32> = (1..=10).collect();
/// let page = Paginator::new("meals", &items).with_requested_page(3.0).page();
///
/// // Only two pages exist at the default size of 5, so page 3 clamps to 2.
/// assert_eq!(page.metadata().page, 2);
/// assert_eq!(page.items(), &items[5..]);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    item_type: String,
    items: &'a [T],
    items_per_page: usize,
    requested_page: f64,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator over `items` with default page size and page
    pub fn new(item_type: impl Into<String>, items: &'a [T]) -> Self {
        Self {
            item_type: item_type.into(),
            items,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            requested_page: DEFAULT_REQUESTED_PAGE,
        }
    }

    /// Set the page size; zero falls back to the default
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = if items_per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            items_per_page
        };
        self
    }

    /// Set the requested page; fractional and out-of-range values are allowed
    #[must_use]
    pub fn with_requested_page(mut self, requested_page: f64) -> Self {
        self.requested_page = requested_page;
        self
    }

    /// Apply `limit` / `page` values parsed from a request query
    #[must_use]
    pub fn with_query(self, query: &PageQuery) -> Self {
        self.with_items_per_page(query.items_per_page())
            .with_requested_page(query.requested_page())
    }

    /// Compute the page window and its metadata
    ///
    /// Invariants on the result:
    /// - `1 <= page <= max(1, ceil(total_count / items_per_page))`
    /// - `prev_page = max(1, page - 1)`, `next_page = min(total_pages, page + 1)`
    /// - the window is exactly `items[(page-1)*L .. page*L)` clipped to bounds
    pub fn page(&self) -> Page<'a, T> {
        let total_count = self.items.len();
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(self.items_per_page)
        };
        let page = resolve_page(self.requested_page, total_pages);

        let start = ((page - 1) * self.items_per_page).min(total_count);
        let end = (start + self.items_per_page).min(total_count);

        let metadata = PageMetadata {
            total_count,
            items_per_page: self.items_per_page,
            page,
            prev_page: (page - 1).max(1),
            next_page: (page + 1).min(total_pages),
        };

        Page::new(self.item_type.clone(), &self.items[start..end], metadata)
    }
}

/// Clamp a requested page into `[1, total_pages]`, flooring fractional values
fn resolve_page(requested: f64, total_pages: usize) -> usize {
    if !requested.is_finite() || requested < 1.0 {
        1
    } else if requested > total_pages as f64 {
        total_pages
    } else {
        requested.floor() as usize
    }
}
