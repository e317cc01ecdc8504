//! Tests for catalog store

use super::*;
use crate::error::Error;
use crate::loader::load_catalog_from_str;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_store() -> CatalogStore {
    let def = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Jollof Rice
    price: 1500
  - mealId: 2
    title: Moi Moi
    forVegetarians: true
    price: 800
  - mealId: 3
    title: Suya
    price: 500
menus:
  - date: 2026-08-30
    meals: [1, 3]
orders:
  - orderId: 1
    mealId: 1
    quantity: 2
    status: delivered
    date: 2026-08-30
  - orderId: 2
    mealId: 2
    status: pending
    date: 2026-08-30
  - orderId: 3
    mealId: 3
    quantity: 4
    status: delivered
    date: 2026-08-31
  - orderId: 4
    mealId: 3
    status: canceled
    date: 2026-08-31
",
    )
    .unwrap();
    CatalogStore::from_definition(def).unwrap()
}

#[test]
fn test_store_counts() {
    let store = sample_store();
    assert_eq!(store.meal_count(), 3);
    assert_eq!(store.menu_count(), 1);
    assert_eq!(store.order_count(), 4);
}

#[test]
fn test_meals_preserve_seed_order() {
    let store = sample_store();
    let titles: Vec<&str> = store.meals().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Jollof Rice", "Moi Moi", "Suya"]);
}

#[test]
fn test_menu_for_day_resolves_meals() {
    let store = sample_store();

    let menu = store.menu_for_day(day("2026-08-30")).unwrap();
    assert_eq!(menu.meals.len(), 2);
    assert_eq!(menu.meals[0].title, "Jollof Rice");
    assert_eq!(menu.meals[1].title, "Suya");

    assert!(store.menu_for_day(day("2026-09-01")).is_none());
}

#[test]
fn test_order_totals_computed() {
    let store = sample_store();

    let order = &store.orders()[0];
    assert_eq!(order.quantity, 2);
    assert!((order.total - 3000.0).abs() < f64::EPSILON);

    // Defaulted quantity of 1
    let order = &store.orders()[1];
    assert!((order.total - 800.0).abs() < f64::EPSILON);
}

#[test]
fn test_orders_for_day() {
    let store = sample_store();

    let orders = store.orders_for_day(day("2026-08-30"));
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_id, 1);
    assert_eq!(orders[1].order_id, 2);

    assert!(store.orders_for_day(day("2026-09-01")).is_empty());
}

#[test]
fn test_summary_over_all_orders() {
    let store = sample_store();

    let summary = store.summary(None);
    assert_eq!(
        summary,
        OrderSummary {
            total_orders: 4,
            total_cash_earned: 3000.0 + 2000.0,
            pending_orders: 1,
        }
    );
}

#[test]
fn test_summary_for_one_day() {
    let store = sample_store();

    let summary = store.summary(Some(day("2026-08-31")));
    assert_eq!(
        summary,
        OrderSummary {
            total_orders: 2,
            total_cash_earned: 2000.0,
            pending_orders: 0,
        }
    );
}

#[test]
fn test_unknown_menu_meal_fails_construction() {
    let def = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
menus:
  - date: 2026-08-30
    meals: [9]
",
    )
    .unwrap();

    let err = CatalogStore::from_definition(def).unwrap_err();
    assert!(matches!(err, Error::UnknownMeal { meal_id: 9, .. }));
}

#[test]
fn test_unknown_order_meal_fails_construction() {
    let def = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
orders:
  - orderId: 1
    mealId: 7
    date: 2026-08-30
",
    )
    .unwrap();

    let err = CatalogStore::from_definition(def).unwrap_err();
    assert!(matches!(err, Error::UnknownMeal { meal_id: 7, .. }));
}

#[test]
fn test_order_status_helpers() {
    assert!(OrderStatus::Delivered.is_delivered());
    assert!(!OrderStatus::Pending.is_delivered());
    assert!(!OrderStatus::Canceled.is_delivered());
    assert_eq!(OrderStatus::default(), OrderStatus::Pending);
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-08-30").unwrap(), day("2026-08-30"));
    assert_eq!(parse_date(" 2026-08-30 ").unwrap(), day("2026-08-30"));
    assert!(parse_date("tomorrow").is_err());
    assert!(parse_date("30/08/2026").is_err());
}
