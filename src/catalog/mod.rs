//! Meal catalog domain
//!
//! Entities (meals, daily menus, orders) and the in-memory store that plays
//! the entity-retrieval role for the HTTP layer: it hands out full, ordered
//! candidate collections and the paginator slices them afterwards.

mod store;
mod types;

pub use store::CatalogStore;
pub use types::{parse_date, Meal, Menu, Order, OrderStatus, OrderSummary};

#[cfg(test)]
mod tests;
