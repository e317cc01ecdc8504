//! In-memory catalog store
//!
//! Read-only after construction: collections are resolved once from a seed
//! definition and handed out as slices or filtered copies. The store never
//! mutates entities, so concurrent readers behind an `Arc` need no locking.

use super::types::{Meal, Menu, Order, OrderSummary};
use crate::error::Result;
use crate::loader::CatalogDefinition;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Resolved catalog: meals, daily menus, and orders
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    meals: Vec<Meal>,
    menus: Vec<Menu>,
    orders: Vec<Order>,
}

impl CatalogStore {
    /// Build a store from a parsed catalog definition
    ///
    /// Menu and order meal references are resolved against the meal list;
    /// an unknown id is a seed-file defect and fails construction. Order
    /// totals are computed here (unit price times quantity).
    pub fn from_definition(def: CatalogDefinition) -> Result<Self> {
        let by_id: HashMap<u64, &Meal> = def.meals.iter().map(|m| (m.meal_id, m)).collect();

        let mut menus = Vec::with_capacity(def.menus.len());
        for menu_def in &def.menus {
            let mut meals = Vec::with_capacity(menu_def.meals.len());
            for meal_id in &menu_def.meals {
                let meal = by_id
                    .get(meal_id)
                    .ok_or_else(|| {
                        crate::error::Error::unknown_meal(*meal_id, format!("menu {}", menu_def.date))
                    })?;
                meals.push((*meal).clone());
            }
            menus.push(Menu {
                date: menu_def.date,
                meals,
            });
        }

        let mut orders = Vec::with_capacity(def.orders.len());
        for order_def in &def.orders {
            let meal = by_id
                .get(&order_def.meal_id)
                .ok_or_else(|| {
                    crate::error::Error::unknown_meal(
                        order_def.meal_id,
                        format!("order {}", order_def.order_id),
                    )
                })?;
            orders.push(Order {
                order_id: order_def.order_id,
                meal: (*meal).clone(),
                quantity: order_def.quantity,
                total: meal.price * f64::from(order_def.quantity),
                status: order_def.status,
                delivery_address: order_def.delivery_address.clone(),
                delivery_phone_no: order_def.delivery_phone_no.clone(),
                date: order_def.date,
            });
        }

        Ok(Self {
            meals: def.meals,
            menus,
            orders,
        })
    }

    /// All meals, in seed order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// All orders, in seed order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The menu composed for a given day, if any
    pub fn menu_for_day(&self, date: NaiveDate) -> Option<&Menu> {
        self.menus.iter().find(|m| m.date == date)
    }

    /// Orders placed on a given day, in seed order
    pub fn orders_for_day(&self, date: NaiveDate) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.date == date)
            .cloned()
            .collect()
    }

    /// Cash accounting over all orders, or over one day when `date` is given
    pub fn summary(&self, date: Option<NaiveDate>) -> OrderSummary {
        let considered: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| date.map_or(true, |d| o.date == d))
            .collect();

        OrderSummary {
            total_orders: considered.len(),
            total_cash_earned: considered
                .iter()
                .filter(|o| o.status.is_delivered())
                .map(|o| o.total)
                .sum(),
            pending_orders: considered
                .iter()
                .filter(|o| o.status == super::OrderStatus::Pending)
                .count(),
        }
    }

    /// Number of meals in the catalog
    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    /// Number of daily menus in the catalog
    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    /// Number of orders in the catalog
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
