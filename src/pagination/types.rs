//! Pagination types
//!
//! Defines the page result and its navigation metadata.

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Page size used when the caller supplies none (or an invalid one)
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Page number used when the caller supplies none (or an invalid one)
pub const DEFAULT_REQUESTED_PAGE: f64 = 1.0;

/// Navigation metadata accompanying a page of items
///
/// Serializes camelCase to match the wire shape consumed by clients:
/// `{ "totalCount": 10, "itemsPerPage": 5, "page": 2, "prevPage": 1, "nextPage": 2 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Total number of items in the source collection
    pub total_count: usize,
    /// Effective page size used for slicing
    pub items_per_page: usize,
    /// The resolved (clamped, integral) page actually served
    pub page: usize,
    /// Page number to navigate backward to (1 on the first page)
    pub prev_page: usize,
    /// Page number to navigate forward to (last page on the last page)
    pub next_page: usize,
}

impl PageMetadata {
    /// Total number of pages in the collection, never less than 1
    pub fn total_pages(&self) -> usize {
        if self.total_count == 0 {
            1
        } else {
            self.total_count.div_ceil(self.items_per_page)
        }
    }

    /// Whether a distinct previous page exists
    pub fn has_prev(&self) -> bool {
        self.prev_page != self.page
    }

    /// Whether a distinct next page exists
    pub fn has_next(&self) -> bool {
        self.next_page != self.page
    }
}

/// A resolved page: the in-bounds item window plus its metadata
///
/// Borrows the source collection; nothing is cloned or mutated. Produced by
/// [`Paginator::page`](crate::pagination::Paginator::page) and discarded once
/// the response body is built.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    item_type: String,
    items: &'a [T],
    metadata: PageMetadata,
}

impl<'a, T> Page<'a, T> {
    pub(crate) fn new(item_type: String, items: &'a [T], metadata: PageMetadata) -> Self {
        Self {
            item_type,
            items,
            metadata,
        }
    }

    /// Label identifying the kind of entity being paginated
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// The item window belonging to the resolved page
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Navigation metadata for the resolved page
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }
}

impl<T: Serialize> Page<'_, T> {
    /// Build the response body `{ "<itemType>": [...], "metadata": {...} }`
    ///
    /// The item-type label becomes the key under which the window is emitted,
    /// so a `Page` labeled `"meals"` serializes as `{ "meals": [...], ... }`.
    pub fn into_body(self) -> Result<JsonValue> {
        let mut body = JsonObject::new();
        body.insert(self.item_type, serde_json::to_value(self.items)?);
        body.insert("metadata".to_string(), serde_json::to_value(self.metadata)?);
        Ok(JsonValue::Object(body))
    }
}
