//! Catalog entity types

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Meal
// ============================================================================

/// A meal offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique meal id
    pub meal_id: u64,
    /// Display title
    pub title: String,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the meal is suitable for vegetarians
    #[serde(default)]
    pub for_vegetarians: bool,
    /// Unit price
    pub price: f64,
}

// ============================================================================
// Menu
// ============================================================================

/// A daily menu: the meals composed for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Day the menu applies to
    pub date: NaiveDate,
    /// Meals on the menu, in catalog order
    pub meals: Vec<Meal>,
}

// ============================================================================
// Order
// ============================================================================

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not yet delivered
    #[default]
    Pending,
    /// Delivered and paid for
    Delivered,
    /// Canceled before delivery
    Canceled,
}

impl OrderStatus {
    /// Whether this order counts towards cash earned
    pub fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// A placed order for a single meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id
    pub order_id: u64,
    /// The ordered meal
    pub meal: Meal,
    /// Quantity ordered
    pub quantity: u32,
    /// Total price (unit price times quantity)
    pub total: f64,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Delivery address, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    /// Delivery phone number, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_phone_no: Option<String>,
    /// Day the order was placed
    pub date: NaiveDate,
}

// ============================================================================
// Accounting
// ============================================================================

/// Cash accounting summary over a set of orders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Number of orders considered
    pub total_orders: usize,
    /// Sum of totals of delivered orders
    pub total_cash_earned: f64,
    /// Number of orders still pending
    pub pending_orders: usize,
}

// ============================================================================
// Dates
// ============================================================================

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::invalid_date(raw))
}
