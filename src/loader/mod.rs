//! Catalog loader
//!
//! Parses and validates YAML seed files describing the meal catalog.
//!
//! # Example seed
//!
//! ```yaml
//! meals:
//!   - mealId: 1
//!     title: Jollof Rice
//!     price: 1500
//! menus:
//!   - date: 2026-08-30
//!     meals: [1]
//! orders:
//!   - orderId: 1
//!     mealId: 1
//!     quantity: 2
//!     status: delivered
//!     date: 2026-08-30
//! ```

mod parser;
mod types;

pub use parser::{load_catalog, load_catalog_from_str};
pub use types::{CatalogDefinition, MenuDefinition, OrderDefinition};

#[cfg(test)]
mod tests;
