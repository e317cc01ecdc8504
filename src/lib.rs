// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mealtime
//!
//! A lightweight meal catalog and ordering API built around a windowed
//! pagination engine.
//!
//! ## Features
//!
//! - **Clamping Pagination**: out-of-range and fractional page requests
//!   degrade gracefully to the nearest valid page, never to an error
//! - **Meal Catalog**: meals, daily menus, and orders loaded from YAML seeds
//! - **Order Accounting**: delivered-cash and pending-order summaries
//! - **HTTP API**: axum server exposing the catalog as paginated collections
//!
//! ## Quick Start
//!
//! ```rust
//! use mealtime::pagination::Paginator;
//!
//! let meals = vec!["jollof", "dodo", "moi moi", "suya", "egusi", "amala"];
//! let page = Paginator::new("meals", &meals)
//!     .with_items_per_page(5)
//!     .with_requested_page(2.0)
//!     .page();
//!
//! assert_eq!(page.items(), &meals[5..]);
//! assert_eq!(page.metadata().page, 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      HTTP API (axum)                    │
//! │  /meals    /menu    /orders    /orders/summary  /health │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │
//! ┌────────────┬──────────────┴───────────┬─────────────────┐
//! │  Paginator │       CatalogStore       │     Loader      │
//! ├────────────┼──────────────────────────┼─────────────────┤
//! │ clamp page │ meals / menus / orders   │ YAML seed files │
//! │ slice+meta │ per-day views, accounting│ validation      │
//! └────────────┴──────────────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination engine
pub mod pagination;

/// Meal catalog domain and in-memory store
pub mod catalog;

/// YAML loader for catalog seed files
pub mod loader;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use loader::{load_catalog, load_catalog_from_str, CatalogDefinition};
pub use pagination::{Page, PageMetadata, PageQuery, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
