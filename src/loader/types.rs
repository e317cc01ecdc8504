//! Seed-file definition types
//!
//! These mirror the YAML shape of a catalog seed. Meal entries deserialize
//! straight into the domain type; menus and orders reference meals by id and
//! are resolved by [`CatalogStore`](crate::catalog::CatalogStore).

use crate::catalog::{Meal, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete catalog seed loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Meals offered by the caterer
    #[serde(default)]
    pub meals: Vec<Meal>,

    /// Daily menus composed from meal ids
    #[serde(default)]
    pub menus: Vec<MenuDefinition>,

    /// Placed orders
    #[serde(default)]
    pub orders: Vec<OrderDefinition>,
}

/// A daily menu referencing meals by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Day the menu applies to
    pub date: NaiveDate,
    /// Ids of the meals on the menu
    pub meals: Vec<u64>,
}

/// An order referencing its meal by id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDefinition {
    /// Unique order id
    pub order_id: u64,

    /// Id of the ordered meal
    pub meal_id: u64,

    /// Quantity ordered
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Lifecycle status
    #[serde(default)]
    pub status: OrderStatus,

    /// Delivery address
    #[serde(default)]
    pub delivery_address: Option<String>,

    /// Delivery phone number
    #[serde(default)]
    pub delivery_phone_no: Option<String>,

    /// Day the order was placed
    pub date: NaiveDate,
}

fn default_quantity() -> u32 {
    1
}
